//! Error and validation-result types shared by the scene and manifest validators.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single schema-violation error.
///
/// The validators accumulate every error found rather than stopping at the
/// first one, so `path` pinpoints where in the document each violation was
/// found (e.g. `layers[2].opacity`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Human-readable description of the violation.
    pub message: String,
    /// JSON-path-like pointer to the offending field.
    pub path: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: path.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at {})", self.message, self.path)
    }
}

impl std::error::Error for ValidationError {}

/// Outcome of validating a scene or manifest document.
///
/// Never raised as an exception (spec §7): the caller decides whether to
/// reject or repair invalid input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>, path: impl Into<String>) {
        self.errors.push(ValidationError::new(message, path));
        self.valid = false;
    }

    pub fn is_ok(&self) -> bool {
        self.valid
    }

    /// Folds another result's errors into this one without losing either side.
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
    }
}

/// Programmer/config-level errors: these indicate a bug, not bad user input.
///
/// Per spec §7, an unknown catalog reference that slipped past the catalog
/// loader's own consistency check, or a planner self-validation failure, is
/// raised immediately rather than returned as a value.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("unknown catalog reference: {0}")]
    UnknownReference(String),

    #[error("planner self-check failed: manifest did not validate after planning: {0:?}")]
    SelfCheckFailed(Vec<ValidationError>),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
