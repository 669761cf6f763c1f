//! Determinism verification toolkit.
//!
//! Every pipeline stage (analyzer, planner, evaluator, guardrails) is
//! specified to produce byte-identical output across runs on identical
//! input and catalogs. This module provides the generic byte-comparison
//! machinery to check that; callers feed it the JSON-serialized stage
//! output, it doesn't know anything about scenes or manifests itself.
//!
//! # Example
//!
//! ```rust,ignore
//! use sizzle_tests::determinism::verify_determinism;
//!
//! let result = verify_determinism(|| serde_json::to_vec(&analyze_scene(&scene, &catalog)).unwrap(), 3);
//! assert!(result.is_deterministic);
//! ```

pub mod builder;
pub mod core;
#[macro_use]
pub mod macros;

pub use builder::DeterminismBuilder;
pub use core::{
    assert_deterministic, compute_hash, verify_determinism, verify_hash_determinism,
    DeterminismResult, DiffContext, DiffInfo,
};
