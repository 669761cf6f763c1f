//! Variety sub-scorer (spec §4.8 "Variety (25%)"): four equally-weighted
//! sub-scores over shot size, content type, visual weight, and motion
//! energy distribution.

use std::collections::HashMap;

use sizzle_spec::enums::{ContentType, MotionEnergy, ShotSize, VisualWeight};
use sizzle_spec::manifest::SequenceManifest;
use sizzle_spec::scene::{Scene, ShotGrammarAxes};

use crate::context::scene_for_entry;
use crate::finding::{Dimension, Finding};

fn shot_size_for(
    entry: &sizzle_spec::manifest::SceneEntry,
    scene: Option<&Scene>,
) -> ShotSize {
    entry
        .shot_grammar
        .or_else(|| scene.and_then(|s| s.metadata.as_ref()).and_then(|m| m.shot_grammar))
        .unwrap_or_else(ShotGrammarAxes::default)
        .shot_size
}

pub fn score_variety(
    manifest: &SequenceManifest,
    scenes_by_id: &HashMap<&str, &Scene>,
) -> (f64, Vec<Finding>) {
    let n = manifest.scenes.len();
    if n <= 2 {
        return (100.0, Vec::new());
    }

    let mut findings = Vec::new();

    let scenes: Vec<Option<&Scene>> = manifest.scenes.iter().map(|e| scene_for_entry(e, scenes_by_id)).collect();
    let shot_sizes: Vec<ShotSize> = manifest
        .scenes
        .iter()
        .zip(&scenes)
        .map(|(e, s)| shot_size_for(e, *s))
        .collect();
    let content_types: Vec<Option<ContentType>> = scenes
        .iter()
        .map(|s| s.and_then(|s| s.metadata.as_ref()).map(|m| m.content_type))
        .collect();
    let visual_weights: Vec<Option<VisualWeight>> = scenes
        .iter()
        .map(|s| s.and_then(|s| s.metadata.as_ref()).map(|m| m.visual_weight))
        .collect();
    let energies: Vec<MotionEnergy> = scenes
        .iter()
        .map(|s| s.and_then(|s| s.metadata.as_ref()).map(|m| m.motion_energy).unwrap_or(MotionEnergy::Moderate))
        .collect();

    // 1. Shot-size.
    let mut shot_size_score = 100.0;
    let mut run_len = 1usize;
    for i in 1..n {
        if shot_sizes[i] == shot_sizes[i - 1] {
            shot_size_score -= 10.0;
            run_len += 1;
            if run_len == 3 {
                shot_size_score -= 25.0;
                findings.push(Finding::warning(
                    Dimension::Variety,
                    format!("3 or more consecutive scenes share shot_size {:?} ending at index {i}", shot_sizes[i]),
                    Some(i),
                ));
            }
        } else {
            run_len = 1;
        }
    }
    shot_size_score = shot_size_score.clamp(0.0, 100.0);

    // 2. Content-type.
    let mut content_type_score = 100.0;
    for i in 1..n {
        if content_types[i].is_some() && content_types[i] == content_types[i - 1] {
            content_type_score -= 20.0;
            findings.push(Finding::info(
                Dimension::Variety,
                format!("adjacent scenes {} and {} share content_type {:?}", i - 1, i, content_types[i].unwrap()),
                Some(i),
            ));
        }
    }
    content_type_score = content_type_score.clamp(0.0, 100.0);

    // 3. Visual-weight balance.
    let mut visual_weight_score = 100.0;
    let mut weight_counts: HashMap<VisualWeight, usize> = HashMap::new();
    for w in visual_weights.iter().flatten() {
        *weight_counts.entry(*w).or_insert(0) += 1;
    }
    if let Some((&dominant, &count)) = weight_counts.iter().max_by_key(|(_, c)| **c) {
        if count as f64 / n as f64 > 0.8 {
            visual_weight_score -= 30.0;
            findings.push(Finding::info(
                Dimension::Variety,
                format!("visual_weight {dominant:?} appears in {count}/{n} scenes, over 80%"),
                None,
            ));
        }
    }
    visual_weight_score = visual_weight_score.clamp(0.0, 100.0);

    // 4. Motion-energy distribution.
    let distinct_energies: std::collections::HashSet<MotionEnergy> = energies.iter().copied().collect();
    let mut motion_energy_score = 100.0;
    if distinct_energies.len() == 1 {
        motion_energy_score -= 40.0;
        findings.push(Finding::warning(
            Dimension::Variety,
            "every scene shares the same motion_energy".to_string(),
            None,
        ));
    } else if distinct_energies.len() >= 3 {
        motion_energy_score += 10.0;
    }
    motion_energy_score = motion_energy_score.clamp(0.0, 100.0);

    let score = (shot_size_score + content_type_score + visual_weight_score + motion_energy_score) / 4.0;
    (score.clamp(0.0, 100.0), findings)
}
