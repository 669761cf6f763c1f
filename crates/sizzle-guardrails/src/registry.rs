//! Registry of the five per-move rules and the combined per-move verdict
//! (spec §4.7 `validateCameraMove`).

use serde::{Deserialize, Serialize};

use sizzle_spec::enums::Verdict;

use crate::rule::{GuardrailFinding, GuardrailRule, MoveContext};
use crate::rules::{AccelerationRule, JerkRule, LensBoundsRule, PersonalityBoundaryRule, SpeedLimitRule};

/// Outcome of running every per-move rule against one camera move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveVerdict {
    pub verdict: Verdict,
    pub findings: Vec<GuardrailFinding>,
}

/// Holds the registered per-move rules, mirroring the discovery-then-run
/// shape of a lint rule registry.
pub struct RuleRegistry {
    rules: Vec<Box<dyn GuardrailRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn default_rules() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SpeedLimitRule));
        registry.register(Box::new(AccelerationRule));
        registry.register(Box::new(JerkRule));
        registry.register(Box::new(LensBoundsRule));
        registry.register(Box::new(PersonalityBoundaryRule));
        registry
    }

    pub fn register(&mut self, rule: Box<dyn GuardrailRule>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Box<dyn GuardrailRule>] {
        &self.rules
    }

    /// Runs every registered rule and folds their findings into one verdict
    /// (BLOCK dominates WARN dominates PASS, spec §4.7).
    pub fn validate_camera_move(&self, ctx: &MoveContext) -> MoveVerdict {
        let mut verdict = Verdict::Pass;
        let mut findings = Vec::new();
        for rule in &self.rules {
            for finding in rule.check(ctx) {
                verdict = verdict.combine(finding.verdict);
                findings.push(finding);
            }
        }
        MoveVerdict { verdict, findings }
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::default_rules()
    }
}

/// Convenience entry point using the default rule set.
pub fn validate_camera_move(ctx: &MoveContext) -> MoveVerdict {
    RuleRegistry::default_rules().validate_camera_move(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_five_rules() {
        let registry = RuleRegistry::default_rules();
        assert_eq!(registry.rules().len(), 5);
    }
}
