//! Structured findings emitted by the evaluator's sub-scorers (spec §4.8).

use serde::{Deserialize, Serialize};

use sizzle_spec::enums::Severity;

/// Which of the four scored dimensions a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Pacing,
    Variety,
    Flow,
    Adherence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub dimension: Dimension,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_index: Option<usize>,
}

impl Finding {
    pub fn new(
        severity: Severity,
        dimension: Dimension,
        message: impl Into<String>,
        scene_index: Option<usize>,
    ) -> Self {
        Self {
            severity,
            dimension,
            message: message.into(),
            scene_index,
        }
    }

    pub fn info(dimension: Dimension, message: impl Into<String>, scene_index: Option<usize>) -> Self {
        Self::new(Severity::Info, dimension, message, scene_index)
    }

    pub fn warning(dimension: Dimension, message: impl Into<String>, scene_index: Option<usize>) -> Self {
        Self::new(Severity::Warning, dimension, message, scene_index)
    }
}
