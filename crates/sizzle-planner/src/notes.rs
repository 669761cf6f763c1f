//! Editorial notes accompanying a planned manifest (spec §4.5 "Output").

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use sizzle_spec::enums::TransitionType;

/// Human-facing summary of what the planner did, returned alongside the
/// manifest so a CLI/tool caller can explain the plan without re-deriving it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerNotes {
    /// Total runtime, netting out transition overlap with the previous
    /// scene's tail (unlike `SequenceManifest::raw_total_duration_s`).
    pub total_duration_s: f64,
    pub scene_count: usize,
    pub ordering_rationale: String,
    pub transition_summary: HashMap<TransitionType, u32>,
}
