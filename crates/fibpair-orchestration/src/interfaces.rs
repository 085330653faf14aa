//! Orchestration interfaces.

use std::time::Duration;

use num_bigint::BigUint;

use fibpair_core::FibIndex;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a single F(n).
    fn present_result(&self, result: &CalculationResult, n: FibIndex, details: bool);

    /// Present the sequence F(0)..F(n-1).
    fn present_sequence(&self, result: &SequenceResult, n: FibIndex);

    /// Present F(n) as computed by several calculators, with whether each
    /// agrees with the first.
    fn present_comparison(&self, results: &[CalculationResult], n: FibIndex, details: bool);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The computed value.
    pub value: BigUint,
    /// Computation duration.
    pub duration: Duration,
}

/// Result of a sequence generation.
#[derive(Debug, Clone)]
pub struct SequenceResult {
    /// Generator name.
    pub generator: String,
    /// Name of the calculator behind the values.
    pub algorithm: String,
    /// F(0)..F(n-1), in order.
    pub values: Vec<BigUint>,
    /// Generation duration.
    pub duration: Duration,
}
