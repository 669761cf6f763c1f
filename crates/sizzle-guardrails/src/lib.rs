//! Guardrails: judges motion plans against physical and editorial safety
//! bounds (spec §4.7). Two entry points — [`validate_camera_move`] for a
//! single move, [`validate_full_manifest`] for a whole planned sequence.

pub mod registry;
pub mod rule;
pub mod rules;
pub mod sequence;

pub use registry::{validate_camera_move, MoveVerdict, RuleRegistry};
pub use rule::{GuardrailFinding, GuardrailRule, MoveContext};
pub use sequence::{validate_full_manifest, ManifestGuardrailResult, SceneGuardrailResult};
