//! Pacing sub-scorer (spec §4.8 "Pacing (25%)").

use std::collections::HashMap;

use sizzle_catalog::{Catalog, Personality, StylePack};
use sizzle_spec::enums::MotionEnergy;
use sizzle_spec::manifest::SequenceManifest;
use sizzle_spec::scene::Scene;

use crate::context::{effective_style_pack, net_total_duration_s, scene_for_entry};
use crate::finding::{Dimension, Finding};

/// Deviation past which a per-scene hold-duration penalty is fully ramped in.
const FULL_PENALTY_DEVIATION_S: f64 = 2.0;
const NO_PENALTY_DEVIATION_S: f64 = 0.5;
const WARNING_DEVIATION_S: f64 = 1.0;
const MAX_DEVIATION_PENALTY: f64 = 20.0;
const MAX_HOLD_OVERRUN_PENALTY: f64 = 15.0;
const LOOP_TIME_BONUS: f64 = 5.0;
const LOOP_TIME_SLACK_S: f64 = 5.0;

pub fn score_pacing(
    manifest: &SequenceManifest,
    scenes_by_id: &HashMap<&str, &Scene>,
    catalog: &Catalog,
    sequence_style: &StylePack,
    personality: &Personality,
) -> (f64, Vec<Finding>) {
    if manifest.scenes.len() <= 1 {
        return (100.0, Vec::new());
    }

    let mut findings = Vec::new();
    let mut total_penalty = 0.0;

    for (i, entry) in manifest.scenes.iter().enumerate() {
        let scene = scene_for_entry(entry, scenes_by_id);
        let style_pack = effective_style_pack(catalog, scene, sequence_style);
        let metadata = scene.and_then(|s| s.metadata.as_ref());
        let energy = metadata.map(|m| m.motion_energy).unwrap_or(MotionEnergy::Moderate);
        let confidence = metadata.map(|m| m.confidence.motion_energy).unwrap_or(1.0);

        let expected = style_pack.hold_duration_for(energy);
        let deviation = (entry.duration_s - expected).abs();

        let mut penalty = if deviation <= NO_PENALTY_DEVIATION_S {
            0.0
        } else {
            let ramp = (deviation.min(FULL_PENALTY_DEVIATION_S) - NO_PENALTY_DEVIATION_S)
                / (FULL_PENALTY_DEVIATION_S - NO_PENALTY_DEVIATION_S);
            MAX_DEVIATION_PENALTY * ramp
        };
        penalty *= confidence;

        if deviation > WARNING_DEVIATION_S {
            findings.push(Finding::warning(
                Dimension::Pacing,
                format!(
                    "scene '{}' duration {:.2}s deviates {:.2}s from expected {:.2}s",
                    entry.scene, entry.duration_s, deviation, expected
                ),
                Some(i),
            ));
        }

        if let Some(cap) = style_pack.max_hold_duration {
            if entry.duration_s > cap {
                penalty += MAX_HOLD_OVERRUN_PENALTY;
                findings.push(Finding::warning(
                    Dimension::Pacing,
                    format!(
                        "scene '{}' duration {:.2}s exceeds max_hold_duration {:.2}s",
                        entry.scene, entry.duration_s, cap
                    ),
                    Some(i),
                ));
            }
        }

        total_penalty += penalty;
    }

    let avg_penalty = total_penalty / manifest.scenes.len() as f64;
    let mut score = 100.0 - avg_penalty;

    let total_duration = net_total_duration_s(manifest);
    let (lo, hi) = personality.loop_time_range;
    if total_duration >= lo && total_duration <= hi {
        score += LOOP_TIME_BONUS;
    } else {
        let over = if total_duration < lo {
            lo - total_duration
        } else {
            total_duration - hi
        };
        if over > LOOP_TIME_SLACK_S {
            score -= LOOP_TIME_BONUS;
            findings.push(Finding::info(
                Dimension::Pacing,
                format!(
                    "total duration {:.2}s is {:.2}s outside the personality's loop_time_range [{:.2}, {:.2}]",
                    total_duration, over, lo, hi
                ),
                None,
            ));
        }
    }

    (score.clamp(0.0, 100.0), findings)
}
