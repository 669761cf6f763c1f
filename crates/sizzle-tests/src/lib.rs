//! End-to-end test infrastructure for the cinematography pipeline.
//!
//! This crate provides integration tests covering the full analyze ->
//! plan -> validate -> evaluate flow, plus the quantified invariants,
//! round-trip laws, and boundary behaviors that bind every stage.
//!
//! ## Running tests
//!
//! ```bash
//! cargo test -p sizzle-tests
//! ```
//!
//! ## Determinism testing
//!
//! The `determinism` module provides tools for verifying that a pipeline
//! stage produces byte-identical output across runs:
//!
//! ```rust,ignore
//! use sizzle_tests::determinism::verify_determinism;
//! use sizzle_tests::test_determinism;
//!
//! let result = verify_determinism(|| serde_json::to_vec(&manifest).unwrap(), 3);
//! assert!(result.is_deterministic);
//! ```

pub mod determinism;
pub mod fixtures;
pub mod harness;

pub use determinism::{
    assert_deterministic, compute_hash, verify_determinism, verify_hash_determinism,
    DeterminismResult,
};
