//! Adherence sub-scorer (spec §4.8 "Adherence (25%)"): camera/transition
//! match rate, shot-grammar compliance, duration match.

use std::collections::HashMap;

use sizzle_catalog::{Personality, StylePack};
use sizzle_spec::manifest::SequenceManifest;
use sizzle_spec::scene::{Scene, ShotGrammarAxes};

use crate::context::{camera_match_rate, scene_for_entry, transition_match_rate};
use crate::finding::{Dimension, Finding};

const DURATION_MATCH_ZERO_AT_S: f64 = 3.0;

fn shot_grammar_for(
    entry: &sizzle_spec::manifest::SceneEntry,
    scene: Option<&Scene>,
) -> ShotGrammarAxes {
    entry
        .shot_grammar
        .or_else(|| scene.and_then(|s| s.metadata.as_ref()).and_then(|m| m.shot_grammar))
        .unwrap_or_default()
}

fn shot_grammar_compliance(
    manifest: &SequenceManifest,
    scenes_by_id: &HashMap<&str, &Scene>,
    personality: &Personality,
    findings: &mut Vec<Finding>,
) -> f64 {
    if manifest.scenes.is_empty() {
        return 100.0;
    }
    let mut total_compliance = 0.0;
    for (i, entry) in manifest.scenes.iter().enumerate() {
        let scene = scene_for_entry(entry, scenes_by_id);
        let axes = shot_grammar_for(entry, scene);

        let mut offenses = 0;
        if !personality.allowed_shot_sizes.contains(&axes.shot_size) {
            offenses += 1;
            findings.push(Finding::warning(
                Dimension::Adherence,
                format!("scene '{}' shot_size {:?} is not in the personality's allowed set", entry.scene, axes.shot_size),
                Some(i),
            ));
        }
        if !personality.allowed_angles.contains(&axes.angle) {
            offenses += 1;
            findings.push(Finding::warning(
                Dimension::Adherence,
                format!("scene '{}' angle {:?} is not in the personality's allowed set", entry.scene, axes.angle),
                Some(i),
            ));
        }
        if !personality.allowed_framings.contains(&axes.framing) {
            offenses += 1;
            findings.push(Finding::warning(
                Dimension::Adherence,
                format!("scene '{}' framing {:?} is not in the personality's allowed set", entry.scene, axes.framing),
                Some(i),
            ));
        }

        total_compliance += 100.0 - (offenses as f64 / 3.0) * 100.0;
    }
    total_compliance / manifest.scenes.len() as f64
}

fn duration_match(
    manifest: &SequenceManifest,
    scenes_by_id: &HashMap<&str, &Scene>,
    style_pack: &StylePack,
) -> f64 {
    if manifest.scenes.is_empty() {
        return 100.0;
    }
    let mut total_deviation = 0.0;
    for entry in &manifest.scenes {
        let energy = scene_for_entry(entry, scenes_by_id)
            .and_then(|s| s.metadata.as_ref())
            .map(|m| m.motion_energy)
            .unwrap_or(sizzle_spec::enums::MotionEnergy::Moderate);
        let expected = style_pack.hold_duration_for(energy);
        total_deviation += (entry.duration_s - expected).abs();
    }
    let avg_deviation = total_deviation / manifest.scenes.len() as f64;
    (100.0 - (avg_deviation / DURATION_MATCH_ZERO_AT_S) * 100.0).clamp(0.0, 100.0)
}

pub fn score_adherence(
    manifest: &SequenceManifest,
    scenes_by_id: &HashMap<&str, &Scene>,
    style_pack: &StylePack,
    personality: &Personality,
) -> (f64, Vec<Finding>) {
    let mut findings = Vec::new();

    let camera_score = camera_match_rate(manifest, scenes_by_id, style_pack, personality);
    let transition_score = transition_match_rate(manifest, scenes_by_id, style_pack);
    let shot_grammar_score = shot_grammar_compliance(manifest, scenes_by_id, personality, &mut findings);
    let duration_score = duration_match(manifest, scenes_by_id, style_pack);

    let score = (camera_score + transition_score + shot_grammar_score + duration_score) / 4.0;
    (score.clamp(0.0, 100.0), findings)
}
