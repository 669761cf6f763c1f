//! The Scene Analyzer: produces `{metadata, _confidence}` for a scene using
//! deterministic rules, no ML, no randomness (spec §4.4).

pub mod color;
pub mod content_type;
pub mod intent_tags;
pub mod motion_energy;
pub mod visual_weight;

use sizzle_catalog::Catalog;
use sizzle_spec::scene::{Confidence, Scene, SceneMetadata};

pub use content_type::classify_content_type;
pub use intent_tags::classify_intent_tags;
pub use motion_energy::classify_motion_energy;
pub use visual_weight::classify_visual_weight;

/// Runs every sub-classifier and assembles `SceneMetadata`, leaving any
/// manually authored `scene.metadata` untouched by the caller (the Analyzer
/// decorates a copy; it never mutates authored fields in place).
pub fn analyze_scene(scene: &Scene, catalog: &Catalog) -> SceneMetadata {
    let (visual_weight, visual_weight_confidence) = classify_visual_weight(scene);
    let (motion_energy, motion_energy_confidence) = classify_motion_energy(scene);
    let (content_type, content_type_confidence) = classify_content_type(scene);
    let (intent_tags, intent_tags_confidence) =
        classify_intent_tags(scene, content_type, motion_energy);
    let (shot_grammar, shot_grammar_confidence) = sizzle_grammar::classify_shot_grammar(
        scene,
        content_type,
        &intent_tags,
        &catalog.shot_grammar,
    );

    SceneMetadata {
        content_type,
        visual_weight,
        motion_energy,
        intent_tags,
        shot_grammar: Some(shot_grammar),
        style_override: None,
        confidence: Confidence {
            content_type: content_type_confidence,
            visual_weight: visual_weight_confidence,
            motion_energy: motion_energy_confidence,
            intent_tags: intent_tags_confidence,
        },
    }
}

/// `_confidence.shot_grammar` isn't part of `Confidence` (spec §3.1 only
/// names `content_type`/`visual_weight`/`motion_energy`/`intent_tags`), but
/// callers that need the per-axis shot-grammar confidence can recompute it
/// directly via `sizzle_grammar::classify_shot_grammar`.
pub fn shot_grammar_confidence(
    scene: &Scene,
    catalog: &Catalog,
) -> sizzle_grammar::ShotGrammarConfidence {
    let (content_type, _) = classify_content_type(scene);
    let (intent_tags, _) = classify_intent_tags(scene, content_type, classify_motion_energy(scene).0);
    sizzle_grammar::classify_shot_grammar(scene, content_type, &intent_tags, &catalog.shot_grammar).1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyzer_is_deterministic() {
        let catalog = Catalog::load_embedded_default();
        let scene: Scene = serde_json::from_str(
            r#"{
                "scene_id": "sc_hero_open",
                "duration_s": 3.0,
                "layout": {"template": "hero-center"},
                "layers": [
                    {"id": "t", "type": "text", "depth_class": "foreground",
                     "content": "HELLO", "animation": "word-reveal"}
                ]
            }"#,
        )
        .unwrap();

        let first = analyze_scene(&scene, &catalog);
        let second = analyze_scene(&scene, &catalog);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        assert!(first.confidence.content_type >= 0.0 && first.confidence.content_type <= 1.0);
    }

    #[test]
    fn brand_mark_scene_gets_hero_tag() {
        let catalog = Catalog::load_embedded_default();
        let scene: Scene = serde_json::from_str(
            r#"{
                "scene_id": "sc_hero_open",
                "duration_s": 3.0,
                "layout": {"template": "hero-center"},
                "layers": [
                    {"id": "t", "type": "text", "depth_class": "foreground", "content": "HELLO"}
                ]
            }"#,
        )
        .unwrap();
        let metadata = analyze_scene(&scene, &catalog);
        assert_eq!(
            metadata.content_type,
            sizzle_spec::enums::ContentType::BrandMark
        );
        assert!(metadata.intent_tags.contains(&sizzle_spec::enums::IntentTag::Hero));
    }
}
