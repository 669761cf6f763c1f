//! Intent tag sub-classifier (spec §4.4): derived from `content_type` and
//! `motion_energy`, with two cross-cutting additions.

use sizzle_spec::enums::{ContentType, IntentTag, LayerType, MotionEnergy, TextAnimation};
use sizzle_spec::scene::Scene;

fn base_tags(scene: &Scene, content_type: ContentType, motion_energy: MotionEnergy) -> Vec<IntentTag> {
    match content_type {
        ContentType::BrandMark => {
            let mut tags = vec![IntentTag::Hero];
            if scene.scene_id.contains("open") {
                tags.push(IntentTag::Opening);
            }
            tags
        }
        ContentType::Typography => {
            if motion_energy == MotionEnergy::High {
                vec![IntentTag::Hero]
            } else if scene
                .foreground_layers()
                .any(|l| l.layer_type == LayerType::Text && l.animation == Some(TextAnimation::WordReveal))
            {
                vec![IntentTag::Opening]
            } else {
                vec![IntentTag::Detail]
            }
        }
        ContentType::UiScreenshot | ContentType::DeviceMockup => vec![IntentTag::Detail],
        ContentType::DataVisualization => vec![IntentTag::Detail, IntentTag::Informational],
        ContentType::Portrait => vec![IntentTag::Emotional],
        ContentType::Collage | ContentType::Moodboard | ContentType::SplitPanel => {
            vec![IntentTag::Informational]
        }
        ContentType::ProductShot | ContentType::Notification => vec![],
    }
}

/// Derives `intent_tags` (spec §4.4).
pub fn classify_intent_tags(
    scene: &Scene,
    content_type: ContentType,
    motion_energy: MotionEnergy,
) -> (Vec<IntentTag>, f64) {
    let mut tags = base_tags(scene, content_type, motion_energy);

    let video_background = scene
        .background_layers()
        .any(|l| l.layer_type == LayerType::Video);
    let text_foreground = scene
        .foreground_layers()
        .any(|l| l.layer_type == LayerType::Text);
    if video_background && text_foreground && !tags.contains(&IntentTag::Emotional) {
        tags.push(IntentTag::Emotional);
    }

    if scene.duration_s <= 1.5 && scene.layers.len() <= 2 && !tags.contains(&IntentTag::Transition) {
        tags.push(IntentTag::Transition);
    }

    let confidence = if tags.is_empty() {
        0.30
    } else {
        (0.55 + 0.10 * tags.len() as f64).min(0.90)
    };

    (tags, confidence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(duration_s: f64, layer_count: usize) -> Scene {
        Scene {
            scene_id: "sc_test".into(),
            duration_s,
            camera: None,
            shot_grammar: None,
            layout: None,
            assets: vec![],
            layers: (0..layer_count)
                .map(|i| sizzle_spec::scene::Layer {
                    id: format!("l{i}"),
                    layer_type: LayerType::Image,
                    depth_class: sizzle_spec::enums::DepthClass::Background,
                    asset: None,
                    position: None,
                    slot: None,
                    opacity: 1.0,
                    blend_mode: None,
                    entrance: None,
                    content: None,
                    animation: None,
                    style: Default::default(),
                })
                .collect(),
            metadata: None,
        }
    }

    #[test]
    fn portrait_is_emotional() {
        let (tags, _) = classify_intent_tags(&scene(3.0, 1), ContentType::Portrait, MotionEnergy::Moderate);
        assert_eq!(tags, vec![IntentTag::Emotional]);
    }

    #[test]
    fn short_scene_adds_transition() {
        let (tags, _) =
            classify_intent_tags(&scene(1.0, 1), ContentType::ProductShot, MotionEnergy::Static);
        assert!(tags.contains(&IntentTag::Transition));
    }

    #[test]
    fn no_tags_has_low_confidence() {
        let (tags, conf) =
            classify_intent_tags(&scene(5.0, 3), ContentType::ProductShot, MotionEnergy::Static);
        assert!(tags.is_empty());
        assert_eq!(conf, 0.30);
    }
}
