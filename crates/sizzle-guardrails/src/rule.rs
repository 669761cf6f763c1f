//! Guardrail rule trait and shared context (spec §4.7).

use sizzle_catalog::{CameraGuardrailsCatalog, Personality};
use sizzle_grammar::ShotGrammarCss;
use sizzle_spec::enums::Verdict;
use sizzle_spec::scene::Camera;

use serde::{Deserialize, Serialize};

/// Translation constants the speed/lens checks are derived from. Not part of
/// the catalog: spec §4.7 names them but leaves their values to the
/// implementation, so they live here as fixed conversion factors rather than
/// authored data.
pub const PAN_MAX_PX: f64 = 1200.0;
pub const SCALE_FACTOR: f64 = 0.5;

/// Everything a per-move guardrail rule needs to judge a single camera move.
pub struct MoveContext<'a> {
    pub camera: &'a Camera,
    pub shot_grammar_css: &'a ShotGrammarCss,
    pub duration_s: f64,
    pub personality_slug: &'a str,
    pub personality: &'a Personality,
    pub guardrails: &'a CameraGuardrailsCatalog,
}

/// One rule's verdict on one move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardrailFinding {
    pub verdict: Verdict,
    pub rule_id: String,
    pub message: String,
}

impl GuardrailFinding {
    pub fn new(verdict: Verdict, rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            verdict,
            rule_id: rule_id.into(),
            message: message.into(),
        }
    }
}

/// A single physical or editorial safety check (spec §4.7 "Checks, per move").
pub trait GuardrailRule: Send + Sync {
    fn id(&self) -> &'static str;

    /// Runs the check, returning zero or more findings (a passing check
    /// returns an empty vec rather than an explicit PASS finding).
    fn check(&self, ctx: &MoveContext) -> Vec<GuardrailFinding>;
}
