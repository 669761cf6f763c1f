//! Shared per-scene lookups the four sub-scorers all need: resolving a
//! manifest entry back to its authored `Scene`, and the style pack that
//! applies to it once `metadata.style_override` graceful fallback is
//! accounted for (spec §4.8 "Graceful degradation").

use std::collections::HashMap;

use sizzle_catalog::{Catalog, Personality, StylePack};
use sizzle_spec::enums::TransitionType;
use sizzle_spec::manifest::SceneEntry;
use sizzle_spec::scene::Scene;

pub fn scene_for_entry<'a>(
    entry: &SceneEntry,
    scenes_by_id: &HashMap<&str, &'a Scene>,
) -> Option<&'a Scene> {
    scenes_by_id.get(entry.scene.as_str()).copied()
}

/// The style pack governing one scene: its own `style_override` if that
/// name resolves in the catalog, otherwise the sequence-level pack. An
/// override naming an unknown pack is not an error here — it silently
/// falls back, per spec §7's "graceful fallback" policy.
pub fn effective_style_pack<'a>(
    catalog: &'a Catalog,
    scene: Option<&Scene>,
    sequence_style: &'a StylePack,
) -> &'a StylePack {
    scene
        .and_then(|s| s.metadata.as_ref())
        .and_then(|m| m.style_override.as_deref())
        .and_then(|name| catalog.style_pack(name))
        .unwrap_or(sequence_style)
}

/// Net runtime: the sum of scene durations minus transition overlap with
/// the previous scene's tail, mirroring `PlannerNotes::total_duration_s`.
pub fn net_total_duration_s(manifest: &sizzle_spec::manifest::SequenceManifest) -> f64 {
    let overlap_s: f64 = manifest
        .scenes
        .iter()
        .filter_map(|e| e.transition_in.as_ref())
        .map(|t| t.duration_ms as f64 / 1000.0)
        .sum();
    manifest.raw_total_duration_s() - overlap_s
}

/// Fraction of consecutive-scene transitions that match what Stage 3 would
/// assign from the style pack's rules — re-derived here rather than taken
/// from the planner's own output (spec §4.8: "do not call into the
/// planner"). A missing `transition_in` counts as `hard_cut` for comparison.
pub fn transition_match_rate(
    manifest: &sizzle_spec::manifest::SequenceManifest,
    scenes_by_id: &HashMap<&str, &Scene>,
    style_pack: &StylePack,
) -> f64 {
    if manifest.scenes.len() <= 1 {
        return 100.0;
    }
    let mut matches = 0usize;
    let mut total = 0usize;
    for i in 1..manifest.scenes.len() {
        let (Some(prev), Some(curr)) = (
            scene_for_entry(&manifest.scenes[i - 1], scenes_by_id),
            scene_for_entry(&manifest.scenes[i], scenes_by_id),
        ) else {
            continue;
        };
        let expected = sizzle_planner::transitions::assign_transition(prev, curr, i, &style_pack.transitions);
        let actual = manifest.scenes[i]
            .transition_in
            .as_ref()
            .map(|t| t.transition_type)
            .unwrap_or(TransitionType::HardCut);
        total += 1;
        if actual == expected.transition_type {
            matches += 1;
        }
    }
    if total == 0 {
        100.0
    } else {
        matches as f64 / total as f64 * 100.0
    }
}

/// Fraction of scenes whose `camera_override` matches what Stage 4 would
/// assign from the style pack's rules (spec §4.8 Adherence #1). A missing
/// override on both sides counts as a match.
pub fn camera_match_rate(
    manifest: &sizzle_spec::manifest::SequenceManifest,
    scenes_by_id: &HashMap<&str, &Scene>,
    style_pack: &StylePack,
    personality: &Personality,
) -> f64 {
    if manifest.scenes.is_empty() {
        return 100.0;
    }
    let mut matches = 0usize;
    for entry in &manifest.scenes {
        let Some(scene) = scene_for_entry(entry, scenes_by_id) else {
            continue;
        };
        let expected =
            sizzle_planner::camera_overrides::assign_camera_override(scene, &style_pack.camera_overrides, personality);
        if entry.camera_override == expected {
            matches += 1;
        }
    }
    matches as f64 / manifest.scenes.len() as f64 * 100.0
}
