//! The Evaluator (spec §4.8): scores a planned manifest on four equally
//! weighted dimensions — pacing, variety, flow, adherence — re-deriving
//! expected transitions and camera overrides directly from style-pack rules
//! rather than calling into the planner, so a manually-edited manifest is
//! caught rather than trusted.

mod adherence;
mod context;
mod finding;
mod flow;
mod pacing;
mod variety;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use sizzle_catalog::Catalog;
use sizzle_spec::error::SpecError;
use sizzle_spec::manifest::SequenceManifest;
use sizzle_spec::scene::Scene;

pub use finding::{Dimension, Finding};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub pacing: f64,
    pub variety: f64,
    pub flow: f64,
    pub adherence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub score: f64,
    pub dimensions: DimensionScores,
    pub findings: Vec<Finding>,
}

/// Scores `manifest` against the scenes it was planned from, under
/// `style_pack_name`. Raises `SpecError::UnknownReference` only for the
/// sequence-level style pack/personality — unknown per-scene
/// `metadata.style_override`s silently fall back (spec §7).
pub fn evaluate_sequence(
    manifest: &SequenceManifest,
    scenes: &[Scene],
    style_pack_name: &str,
    catalog: &Catalog,
) -> Result<EvaluationResult, SpecError> {
    let style_pack = catalog
        .style_pack(style_pack_name)
        .ok_or_else(|| SpecError::UnknownReference(style_pack_name.to_string()))?;
    let personality = catalog
        .personality(&style_pack.personality)
        .ok_or_else(|| SpecError::UnknownReference(style_pack.personality.clone()))?;

    let scenes_by_id: HashMap<&str, &Scene> = scenes.iter().map(|s| (s.scene_id.as_str(), s)).collect();

    let (pacing_score, mut findings) =
        pacing::score_pacing(manifest, &scenes_by_id, catalog, style_pack, personality);
    let (variety_score, variety_findings) = variety::score_variety(manifest, &scenes_by_id);
    let (flow_score, flow_findings) = flow::score_flow(manifest, &scenes_by_id, style_pack);
    let (adherence_score, adherence_findings) =
        adherence::score_adherence(manifest, &scenes_by_id, style_pack, personality);

    findings.extend(variety_findings);
    findings.extend(flow_findings);
    findings.extend(adherence_findings);

    let dimensions = DimensionScores {
        pacing: pacing_score,
        variety: variety_score,
        flow: flow_score,
        adherence: adherence_score,
    };
    let score = (pacing_score + variety_score + flow_score + adherence_score) / 4.0;

    Ok(EvaluationResult { score, dimensions, findings })
}
