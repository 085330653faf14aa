//! Calculator traits and the `FibCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by orchestration and sequence
//! generators. `CoreCalculator` is the trait implemented by algorithms.
//! `FibCalculator` is a decorator that adds the table fast path (n <= 93).
//!
//! Both traits take an already validated [`FibIndex`], so they cannot fail.

use std::sync::Arc;

use num_bigint::BigUint;

use crate::constants::{FIB_TABLE, MAX_FIB_U64};
use crate::index::FibIndex;

/// Public trait for Fibonacci calculators.
pub trait Calculator: Send + Sync {
    /// Calculate F(n).
    fn calculate(&self, n: FibIndex) -> BigUint;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Trait for algorithm implementations.
/// Wrapped by `FibCalculator` which adds the fast path.
pub trait CoreCalculator: Send + Sync {
    /// Perform the core calculation for any n.
    fn calculate_core(&self, n: u64) -> BigUint;

    /// Get the name of this algorithm.
    fn name(&self) -> &str;
}

/// Decorator that wraps a `CoreCalculator` with a table fast path.
pub struct FibCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl FibCalculator {
    /// Create a new `FibCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }

    /// Fast path for small n (n <= 93) using precomputed table.
    #[allow(clippy::cast_possible_truncation)]
    fn calculate_small(n: u64) -> BigUint {
        BigUint::from(FIB_TABLE[n as usize])
    }
}

impl Calculator for FibCalculator {
    fn calculate(&self, n: FibIndex) -> BigUint {
        let n = n.get();
        if n <= MAX_FIB_U64 {
            return Self::calculate_small(n);
        }
        self.inner.calculate_core(n)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
