//! Sequence manifest types (spec §3.1, §6.2): the planner's output.

use serde::{Deserialize, Serialize};

use crate::enums::{CameraMove, Easing, TransitionType};
use crate::scene::ShotGrammarAxes;

/// Canvas size for a manifest (spec §6.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub w: u32,
    pub h: u32,
}

/// Supported output frame rates (spec §3.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum Fps {
    Fps24 = 24,
    Fps30 = 30,
    Fps60 = 60,
}

impl Fps {
    pub fn as_u32(&self) -> u32 {
        match self {
            Fps::Fps24 => 24,
            Fps::Fps30 => 30,
            Fps::Fps60 => 60,
        }
    }

    pub fn from_u32(v: u32) -> Option<Self> {
        match v {
            24 => Some(Fps::Fps24),
            30 => Some(Fps::Fps30),
            60 => Some(Fps::Fps60),
            _ => None,
        }
    }
}

impl Serialize for Fps {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.as_u32())
    }
}

impl<'de> Deserialize<'de> for Fps {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = u32::deserialize(deserializer)?;
        Fps::from_u32(v).ok_or_else(|| serde::de::Error::custom(format!("invalid fps: {v}")))
    }
}

/// Transition applied going into a scene entry (spec §6.2).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionIn {
    #[serde(rename = "type")]
    pub transition_type: TransitionType,
    pub duration_ms: u32,
}

/// Planner- or author-assigned camera move for a scene entry (spec §6.2).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraOverride {
    #[serde(rename = "move")]
    pub move_: CameraMove,
    pub intensity: f64,
    pub easing: Easing,
}

/// One scene's placement within a planned sequence (spec §3.1, §6.2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEntry {
    pub scene: String,
    pub duration_s: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_in: Option<TransitionIn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_override: Option<CameraOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot_grammar: Option<ShotGrammarAxes>,
}

/// The planner's output: an ordered, timed, transitioned sequence of scenes
/// (spec §3.1, §6.2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceManifest {
    pub sequence_id: String,
    pub resolution: Resolution,
    pub fps: Fps,
    pub style: String,
    pub scenes: Vec<SceneEntry>,
}

impl SequenceManifest {
    /// Total runtime, simply summing each entry's hold duration (does not
    /// net out transition overlap — see `PlannerNotes::total_duration_s`
    /// in `sizzle-planner` for the netted figure used in editorial notes).
    pub fn raw_total_duration_s(&self) -> f64 {
        self.scenes.iter().map(|s| s.duration_s).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_round_trips_as_integer() {
        let json = serde_json::to_string(&Fps::Fps30).unwrap();
        assert_eq!(json, "30");
        let back: Fps = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_u32(), 30);
    }

    #[test]
    fn rejects_unknown_fps() {
        let result: Result<Fps, _> = serde_json::from_str("25");
        assert!(result.is_err());
    }
}
