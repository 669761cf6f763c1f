//! Flow sub-scorer (spec §4.8 "Flow (25%)"): energy arc, intent
//! progression, transition coherence.

use std::collections::HashMap;

use sizzle_catalog::StylePack;
use sizzle_spec::enums::{IntentTag, MotionEnergy};
use sizzle_spec::manifest::SequenceManifest;
use sizzle_spec::scene::Scene;

use crate::context::{scene_for_entry, transition_match_rate};
use crate::finding::{Dimension, Finding};

fn energy_arc(energies: &[MotionEnergy], opener_tags: &[IntentTag], findings: &mut Vec<Finding>) -> f64 {
    let n = energies.len();
    if energies.iter().all(|e| *e == energies[0]) {
        findings.push(Finding::info(Dimension::Flow, "motion_energy is flat across the sequence".to_string(), None));
        return 40.0;
    }

    let max_energy = energies.iter().copied().max().unwrap_or(MotionEnergy::Moderate);
    let peak = energies.iter().position(|e| *e == max_energy).unwrap_or(0);
    let position = if n > 1 { peak as f64 / (n - 1) as f64 } else { 0.0 };

    if (0.3..=0.7).contains(&position) {
        100.0
    } else if position < 0.15 {
        let opener_is_hero_or_opening =
            opener_tags.contains(&IntentTag::Hero) || opener_tags.contains(&IntentTag::Opening);
        if opener_is_hero_or_opening {
            80.0
        } else {
            findings.push(Finding::warning(
                Dimension::Flow,
                format!("energy peaks at scene {peak} (position {position:.2}) with no hero/opening tag to justify it"),
                Some(peak),
            ));
            40.0
        }
    } else {
        70.0
    }
}

fn intent_progression(tag_lists: &[&[IntentTag]], findings: &mut Vec<Finding>) -> f64 {
    let n = tag_lists.len();
    let has_relevant = tag_lists
        .iter()
        .any(|tags| tags.contains(&IntentTag::Opening) || tags.contains(&IntentTag::Closing) || tags.contains(&IntentTag::Hero));
    if !has_relevant {
        return 60.0;
    }

    let first_quartile = (n as f64 * 0.25).ceil().max(1.0) as usize;
    let last_quartile_start = n.saturating_sub((n as f64 * 0.25).ceil().max(1.0) as usize);
    let first_half = (n as f64 * 0.5).ceil().max(1.0) as usize;

    let mut score = 0.0;

    let opening_positions: Vec<usize> = tag_lists
        .iter()
        .enumerate()
        .filter(|(_, tags)| tags.contains(&IntentTag::Opening))
        .map(|(i, _)| i)
        .collect();
    if !opening_positions.is_empty() {
        if opening_positions.iter().any(|&i| i < first_quartile) {
            score += 33.0;
        } else if opening_positions.iter().all(|&i| i >= last_quartile_start) {
            findings.push(Finding::warning(
                Dimension::Flow,
                "opening-tagged scene appears only in the last quartile".to_string(),
                Some(opening_positions[0]),
            ));
        }
    }

    if tag_lists.iter().enumerate().any(|(i, tags)| i >= last_quartile_start && tags.contains(&IntentTag::Closing)) {
        score += 33.0;
    }

    if tag_lists.iter().enumerate().any(|(i, tags)| i < first_half && tags.contains(&IntentTag::Hero)) {
        score += 34.0;
    }

    score
}

pub fn score_flow(
    manifest: &SequenceManifest,
    scenes_by_id: &HashMap<&str, &Scene>,
    style_pack: &StylePack,
) -> (f64, Vec<Finding>) {
    let n = manifest.scenes.len();
    if n <= 1 {
        return (100.0, Vec::new());
    }

    let mut findings = Vec::new();

    let energies: Vec<MotionEnergy> = manifest
        .scenes
        .iter()
        .map(|e| {
            scene_for_entry(e, scenes_by_id)
                .and_then(|s| s.metadata.as_ref())
                .map(|m| m.motion_energy)
                .unwrap_or(MotionEnergy::Moderate)
        })
        .collect();
    let empty: Vec<IntentTag> = Vec::new();
    let tag_lists: Vec<&[IntentTag]> = manifest
        .scenes
        .iter()
        .map(|e| {
            scene_for_entry(e, scenes_by_id)
                .and_then(|s| s.metadata.as_ref())
                .map(|m| m.intent_tags.as_slice())
                .unwrap_or(empty.as_slice())
        })
        .collect();

    let energy_arc_score = energy_arc(&energies, tag_lists[0], &mut findings);
    let intent_progression_score = intent_progression(&tag_lists, &mut findings);
    let transition_coherence_score = transition_match_rate(manifest, scenes_by_id, style_pack);

    let score = 0.4 * energy_arc_score + 0.3 * intent_progression_score + 0.3 * transition_coherence_score;
    (score.clamp(0.0, 100.0), findings)
}
