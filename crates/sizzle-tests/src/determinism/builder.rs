//! Builder pattern for custom determinism tests.

use crate::determinism::core::{verify_determinism, DeterminismResult};

/// Builder for custom determinism tests with explicit generation functions.
///
/// Use this when a stage's output isn't naturally `&[u8]`, or when the
/// generation logic needs setup beyond a single closure argument.
///
/// # Example
///
/// ```rust,ignore
/// use sizzle_tests::determinism::DeterminismBuilder;
/// use sizzle_planner::plan_sequence;
///
/// let result = DeterminismBuilder::new()
///     .runs(5)
///     .generate(|| {
///         let (manifest, _) = plan_sequence(&scenes, "confident-launch", "seq_a".into(), res, fps, &catalog).unwrap();
///         serde_json::to_vec(&manifest).unwrap()
///     })
///     .verify();
/// ```
pub struct DeterminismBuilder<F, O>
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    runs: usize,
    generator: Option<F>,
    _phantom: std::marker::PhantomData<O>,
}

impl<F, O> DeterminismBuilder<F, O>
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            runs: 3,
            generator: None,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Set the number of runs.
    pub fn runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Set the generation function.
    pub fn generate(mut self, f: F) -> Self {
        self.generator = Some(f);
        self
    }

    /// Verify determinism and return the result.
    ///
    /// # Panics
    /// Panics if no generator was set.
    pub fn verify(self) -> DeterminismResult {
        let generator = self
            .generator
            .expect("No generator set - call .generate() first");
        verify_determinism(generator, self.runs)
    }

    /// Verify determinism and panic on failure.
    ///
    /// # Panics
    /// Panics if no generator was set or if output is non-deterministic.
    pub fn assert(self) {
        self.verify().assert_deterministic();
    }
}

impl<F, O> Default for DeterminismBuilder<F, O>
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    fn default() -> Self {
        Self::new()
    }
}
