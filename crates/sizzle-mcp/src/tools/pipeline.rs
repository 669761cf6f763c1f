//! Parameter types for the pure pipeline-stage tools (spec §6.5:
//! `analyze_scene` / `plan_sequence` / `evaluate_sequence`).

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Deserialize, JsonSchema)]
pub struct AnalyzeSceneParams {
    /// One scene, as JSON matching the scene schema
    pub scene: serde_json::Value,
}

#[derive(Deserialize, JsonSchema)]
pub struct PlanSequenceParams {
    /// Already-analyzed scenes, as a JSON array
    pub scenes: Vec<serde_json::Value>,
    /// Style pack name
    pub style: String,
    /// Sequence identifier; defaults to "seq_planned" if omitted
    pub sequence_id: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// One of 24, 30, 60; defaults to 30
    pub fps: Option<u32>,
}

#[derive(Deserialize, JsonSchema)]
pub struct EvaluateSequenceParams {
    /// The planned manifest, as JSON
    pub manifest: serde_json::Value,
    /// The analyzed scenes the manifest was planned from, as a JSON array
    pub scenes: Vec<serde_json::Value>,
    /// Style pack name
    pub style: String,
}
