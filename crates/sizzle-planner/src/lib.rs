//! The Sequence Planner (spec §4.5): turns a set of analyzed scenes into an
//! ordered, timed, transitioned `SequenceManifest`, self-validating its own
//! output before returning it.

pub mod camera_overrides;
pub mod notes;
pub mod order;
pub mod transitions;

use std::collections::HashMap;
use std::collections::HashSet;

use sizzle_catalog::Catalog;
use sizzle_spec::enums::MotionEnergy;
use sizzle_spec::error::SpecError;
use sizzle_spec::manifest::{Fps, Resolution, SceneEntry, SequenceManifest};
use sizzle_spec::scene::Scene;
use sizzle_spec::validate::validate_manifest;

pub use notes::PlannerNotes;

/// Plans a sequence from already-analyzed scenes (each `scene.metadata` is
/// expected to be populated by the Scene Analyzer; scenes missing metadata
/// are treated as `moderate` energy / untagged for ordering purposes).
///
/// Raises `SpecError::SelfCheckFailed` if the assembled manifest doesn't
/// validate against its own scene set — an internal invariant violation,
/// not a user-facing error (spec §7).
pub fn plan_sequence(
    scenes: &[Scene],
    style_pack_name: &str,
    sequence_id: String,
    resolution: Resolution,
    fps: Fps,
    catalog: &Catalog,
) -> Result<(SequenceManifest, PlannerNotes), SpecError> {
    let style_pack = catalog
        .style_pack(style_pack_name)
        .ok_or_else(|| SpecError::UnknownReference(style_pack_name.to_string()))?;
    let personality = catalog
        .personality(&style_pack.personality)
        .ok_or_else(|| SpecError::UnknownReference(style_pack.personality.clone()))?;

    let ordered = order::order_scenes(scenes);

    let mut entries = Vec::with_capacity(ordered.len());
    let mut transition_summary: HashMap<sizzle_spec::enums::TransitionType, u32> = HashMap::new();

    for (i, scene) in ordered.iter().enumerate() {
        let energy = scene
            .metadata
            .as_ref()
            .map(|m| m.motion_energy)
            .unwrap_or(MotionEnergy::Moderate);
        let duration_s = style_pack.hold_duration_for(energy);

        let transition_in = if i == 0 {
            None
        } else {
            let assigned =
                transitions::assign_transition(&ordered[i - 1], scene, i, &style_pack.transitions);
            *transition_summary.entry(assigned.transition_type).or_insert(0) += 1;
            Some(assigned)
        };

        let camera_override =
            camera_overrides::assign_camera_override(scene, &style_pack.camera_overrides, personality);

        let shot_grammar = scene.metadata.as_ref().and_then(|m| m.shot_grammar);

        entries.push(SceneEntry {
            scene: scene.scene_id.clone(),
            duration_s,
            transition_in,
            camera_override,
            shot_grammar,
        });
    }

    let manifest = SequenceManifest {
        sequence_id,
        resolution,
        fps,
        style: style_pack_name.to_string(),
        scenes: entries,
    };

    let known_scene_ids: HashSet<&str> = scenes.iter().map(|s| s.scene_id.as_str()).collect();
    let result = validate_manifest(&manifest, &known_scene_ids);
    if !result.is_ok() {
        return Err(SpecError::SelfCheckFailed(result.errors));
    }

    let overlap_s: f64 = manifest
        .scenes
        .iter()
        .filter_map(|e| e.transition_in.as_ref())
        .map(|t| t.duration_ms as f64 / 1000.0)
        .sum();
    let total_duration_s = manifest.raw_total_duration_s() - overlap_s;

    let ordering_rationale = format!(
        "Ordered by intent bucket (opening, hero, detail/informational/transition/untagged \
         interleaved with emotional, closing), then variety-swept for adjacent content-type \
         repeats, 3+ consecutive visual-weight runs, and a high-energy opener. Final order: {}.",
        manifest
            .scenes
            .iter()
            .map(|e| e.scene.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let notes = PlannerNotes {
        total_duration_s,
        scene_count: manifest.scenes.len(),
        ordering_rationale,
        transition_summary,
    };

    Ok((manifest, notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizzle_spec::enums::{ContentType, IntentTag, VisualWeight};
    use sizzle_spec::scene::{Confidence, SceneMetadata};

    fn analyzed_scene(id: &str, content_type: ContentType, tags: Vec<IntentTag>) -> Scene {
        Scene {
            scene_id: id.into(),
            duration_s: 3.0,
            camera: None,
            shot_grammar: None,
            layout: None,
            assets: vec![],
            layers: vec![],
            metadata: Some(SceneMetadata {
                content_type,
                visual_weight: VisualWeight::Mixed,
                motion_energy: MotionEnergy::Moderate,
                intent_tags: tags,
                shot_grammar: None,
                style_override: None,
                confidence: Confidence {
                    content_type: 0.8,
                    visual_weight: 0.8,
                    motion_energy: 0.8,
                    intent_tags: 0.8,
                },
            }),
        }
    }

    #[test]
    fn plans_a_valid_self_validating_manifest() {
        let catalog = Catalog::load_embedded_default();
        let scenes = vec![
            analyzed_scene("sc_open", ContentType::BrandMark, vec![IntentTag::Opening]),
            analyzed_scene("sc_detail", ContentType::ProductShot, vec![IntentTag::Detail]),
            analyzed_scene("sc_close", ContentType::BrandMark, vec![IntentTag::Closing]),
        ];
        let (manifest, planner_notes) = plan_sequence(
            &scenes,
            "confident-launch",
            "seq_launch".into(),
            Resolution { w: 1080, h: 1920 },
            Fps::Fps30,
            &catalog,
        )
        .unwrap();

        assert_eq!(manifest.scenes.len(), 3);
        assert!(manifest.scenes[0].transition_in.is_none());
        assert!(manifest.scenes[1].transition_in.is_some());
        assert_eq!(planner_notes.scene_count, 3);
        assert!(planner_notes.total_duration_s <= manifest.raw_total_duration_s());
    }

    #[test]
    fn unknown_style_pack_is_an_unknown_reference() {
        let catalog = Catalog::load_embedded_default();
        let scenes = vec![analyzed_scene("sc_a", ContentType::ProductShot, vec![])];
        let result = plan_sequence(
            &scenes,
            "does-not-exist",
            "seq_x".into(),
            Resolution { w: 1080, h: 1920 },
            Fps::Fps30,
            &catalog,
        );
        assert!(matches!(result, Err(SpecError::UnknownReference(_))));
    }
}
