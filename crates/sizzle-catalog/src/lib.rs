//! The reference catalog: personalities, style packs, shot grammar,
//! camera guardrail bounds, and the primitives registry — loaded once at
//! process start and held as process-wide read-only state (spec §3.2, §4.1).

pub mod error;
pub mod guardrails;
pub mod loader;
pub mod personality;
pub mod primitives;
pub mod shot_grammar;
pub mod style_pack;

pub use error::CatalogError;
pub use guardrails::{
    AccelerationConfig, CameraGuardrailsCatalog, JerkConfig, LensBounds, PersonalityBoundary,
    Range, SpeedLimit,
};
pub use loader::{find_catalog_root_from, Catalog};
pub use personality::Personality;
pub use primitives::{Primitive, PrimitivesRegistry};
pub use shot_grammar::{AngleCss, FramingCss, ShotGrammarCatalog, ShotSizeCss};
pub use style_pack::{
    CameraOverridesConfig, CameraSpec, OnIntentCameraRule, OnIntentTransitionRule, PatternRule,
    StylePack, TransitionSpec, TransitionsConfig,
};
