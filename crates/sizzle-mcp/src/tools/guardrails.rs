//! Parameter types for the validation tools (spec §6.5: `validate_choreography`
//! / `validate_guardrails`).

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Deserialize, JsonSchema)]
pub struct ValidateChoreographyParams {
    /// A scene, as JSON matching the scene schema
    pub scene: serde_json::Value,
}

/// Accepts either shape named in spec §6.5's `validate_guardrails` row: a
/// single camera move plus shot grammar, duration, and personality, or a
/// full planned manifest plus the scenes it references.
#[derive(Deserialize, JsonSchema)]
pub struct ValidateGuardrailsParams {
    /// Style pack name; resolves the personality for either input shape
    pub style: String,

    /// Single-move shape: a camera move, as JSON matching the camera schema
    pub camera: Option<serde_json::Value>,
    /// Single-move shape: shot grammar axes, as JSON
    pub shot_grammar: Option<serde_json::Value>,
    /// Single-move shape: the move's duration in seconds
    pub duration_s: Option<f64>,

    /// Full-manifest shape: the planned manifest, as JSON
    pub manifest: Option<serde_json::Value>,
    /// Full-manifest shape: the scenes the manifest references, as a JSON array
    pub scenes: Option<Vec<serde_json::Value>>,
}
