//! Lazy Fibonacci iterator using the standard additive recurrence.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::calculator::CoreCalculator;
use crate::fastdoubling::fib_pair;

/// Lazy iterator over the Fibonacci sequence.
///
/// Yields `(index, F(index))` pairs starting from F(0).
///
/// # Example
/// ```
/// use fibpair_core::iterator::FibIterator;
/// let fibs: Vec<_> = FibIterator::new().take(7).map(|(_, v)| v.to_string()).collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
pub struct FibIterator {
    a: BigUint,
    b: BigUint,
    index: u64,
}

impl FibIterator {
    /// Start iteration at F(0).
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: BigUint::zero(),
            b: BigUint::one(),
            index: 0,
        }
    }

    /// Start iteration at F(n), jumping there with one fast doubling call.
    #[must_use]
    pub fn from_index(n: u64) -> Self {
        let (a, b) = fib_pair(n);
        Self { a, b, index: n }
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = (u64, BigUint);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.index;
        self.index = idx.checked_add(1)?;
        let next = &self.a + &self.b;
        let val = std::mem::replace(&mut self.a, std::mem::replace(&mut self.b, next));
        Some((idx, val))
    }
}

/// O(n) additive iteration, kept as a reference oracle for the doubling
/// calculators.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearIteration;

impl LinearIteration {
    /// Create a linear calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CoreCalculator for LinearIteration {
    fn calculate_core(&self, n: u64) -> BigUint {
        let mut a = BigUint::zero();
        let mut b = BigUint::one();
        for _ in 0..n {
            let next = &a + &b;
            a = std::mem::replace(&mut b, next);
        }
        a
    }

    fn name(&self) -> &'static str {
        "LinearIteration"
    }
}
