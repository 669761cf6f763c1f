//! Camera guardrail bounds (spec §3.1 "Guardrail bounds", §4.7).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedLimit {
    pub max_velocity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccelerationConfig {
    pub deceleration_phase_minimum: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JerkConfig {
    pub settling_on_reversal_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LensBounds {
    pub scale: Range,
    pub rotation: Range,
}

/// Per-personality forbidden-feature set and numeric caps (spec §4.7 #5).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityBoundary {
    #[serde(default)]
    pub forbidden_features: Vec<String>,
    #[serde(default)]
    pub max_translate_xy: Option<f64>,
    #[serde(default)]
    pub max_scale_change_percent: Option<f64>,
}

impl PersonalityBoundary {
    pub fn forbids(&self, feature: &str) -> bool {
        self.forbidden_features.iter().any(|f| f == feature)
    }
}

/// Physical/editorial safety bounds, keyed so they can be looked up per
/// personality without threading the whole catalog through every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraGuardrailsCatalog {
    pub speed_limits: HashMap<String, SpeedLimit>,
    pub acceleration: AccelerationConfig,
    pub jerk: JerkConfig,
    pub lens_bounds: LensBounds,
    pub personality_boundaries: HashMap<String, PersonalityBoundary>,
}
