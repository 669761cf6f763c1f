//! Style pack catalog entries (spec §3.1, §4.5 Stages 2-4).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use sizzle_spec::enums::{CameraMove, ContentType, Easing, IntentTag, MotionEnergy, TransitionType};

/// A transition spelled out as a concrete cut directive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionSpec {
    #[serde(rename = "type")]
    pub transition_type: TransitionType,
    pub duration_ms: u32,
}

/// "Every Nth scene" transition, cycling through a fixed sequence of specs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRule {
    pub every_nth: u32,
    pub cycle: Vec<TransitionSpec>,
}

/// A style pack's transition rule set (spec §4.5 Stage 3).
///
/// Declared as named slots rather than a heterogeneous ordered list: the
/// evaluation priority (`pattern` > `on_same_weight` > `on_weight_change` >
/// `on_intent` > `default`) is fixed regardless of authoring order, so the
/// catalog format mirrors that directly instead of re-deriving priority from
/// list position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionsConfig {
    #[serde(default)]
    pub pattern: Option<PatternRule>,
    #[serde(default)]
    pub on_same_weight: Option<TransitionSpec>,
    #[serde(default)]
    pub on_weight_change: Option<TransitionSpec>,
    #[serde(default)]
    pub on_intent: Vec<OnIntentTransitionRule>,
    pub default: TransitionSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnIntentTransitionRule {
    pub tags: Vec<IntentTag>,
    pub transition: TransitionSpec,
}

/// A camera directive declared by a rule (move + intensity + easing).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSpec {
    #[serde(rename = "move")]
    pub move_: CameraMove,
    pub intensity: f64,
    pub easing: Easing,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OnIntentCameraRule {
    pub tag: IntentTag,
    #[serde(rename = "move")]
    pub move_: CameraMove,
    pub intensity: f64,
    pub easing: Easing,
}

/// A style pack's camera-override rule set (spec §4.5 Stage 4).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraOverridesConfig {
    #[serde(default)]
    pub force_static: bool,
    #[serde(default)]
    pub by_content_type: HashMap<ContentType, CameraSpec>,
    #[serde(default)]
    pub by_intent: Vec<OnIntentCameraRule>,
}

/// A named editorial recipe (spec §3.1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylePack {
    pub personality: String,
    pub hold_durations: HashMap<MotionEnergy, f64>,
    #[serde(default)]
    pub max_hold_duration: Option<f64>,
    pub transitions: TransitionsConfig,
    pub camera_overrides: CameraOverridesConfig,
}

impl StylePack {
    /// `hold_durations[energy]`, falling back to `moderate` (spec §4.5 Stage 2).
    pub fn hold_duration_for(&self, energy: MotionEnergy) -> f64 {
        let raw = self
            .hold_durations
            .get(&energy)
            .or_else(|| self.hold_durations.get(&MotionEnergy::Moderate))
            .copied()
            .unwrap_or(3.0);
        match self.max_hold_duration {
            Some(cap) => raw.min(cap),
            None => raw,
        }
    }
}
