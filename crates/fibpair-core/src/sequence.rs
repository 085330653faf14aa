//! Sequence generators.
//!
//! Every generator returns `(i, F(i))` for `start <= i < end` in index
//! order, and all of them produce identical output.

use std::sync::Arc;

use num_bigint::BigUint;
use rayon::prelude::*;
use tracing::debug;

use crate::calculator::{Calculator, FibCalculator};
use crate::error::FibError;
use crate::fastdoubling::FastDoubling;
use crate::index::FibIndex;
use crate::iterator::FibIterator;

/// Trait for generating sequences of Fibonacci numbers.
pub trait SequenceGenerator: Send + Sync {
    /// Generate F(i) for every `i` in `start..end`.
    fn generate(&self, start: FibIndex, end: FibIndex) -> Result<Vec<(u64, BigUint)>, FibError>;

    /// Get the name of this generator.
    fn name(&self) -> &str;

    /// Name of the calculator whose values this generator produces.
    fn algorithm(&self) -> &str;
}

fn check_range(start: FibIndex, end: FibIndex) -> Result<std::ops::Range<u64>, FibError> {
    if start > end {
        return Err(FibError::InvalidArgument(format!(
            "sequence start {start} is past its end {end}"
        )));
    }
    Ok(start.get()..end.get())
}

fn default_calculator() -> Arc<dyn Calculator> {
    Arc::new(FibCalculator::new(Arc::new(FastDoubling::new())))
}

/// One independent calculator call per index.
pub struct IndependentGenerator {
    calculator: Arc<dyn Calculator>,
}

impl IndependentGenerator {
    /// Generator backed by the given calculator.
    #[must_use]
    pub fn new(calculator: Arc<dyn Calculator>) -> Self {
        Self { calculator }
    }
}

impl Default for IndependentGenerator {
    fn default() -> Self {
        Self::new(default_calculator())
    }
}

impl SequenceGenerator for IndependentGenerator {
    fn generate(&self, start: FibIndex, end: FibIndex) -> Result<Vec<(u64, BigUint)>, FibError> {
        let range = check_range(start, end)?;
        Ok(range
            .map(|i| (i, self.calculator.calculate(FibIndex::new(i))))
            .collect())
    }

    fn name(&self) -> &'static str {
        "Independent"
    }

    fn algorithm(&self) -> &str {
        self.calculator.name()
    }
}

/// Jump to `start` with one doubling call, then walk the recurrence.
#[derive(Debug, Default, Clone, Copy)]
pub struct IncrementalGenerator;

impl IncrementalGenerator {
    /// Create an incremental generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SequenceGenerator for IncrementalGenerator {
    #[allow(clippy::cast_possible_truncation)]
    fn generate(&self, start: FibIndex, end: FibIndex) -> Result<Vec<(u64, BigUint)>, FibError> {
        let range = check_range(start, end)?;
        let len = range.end - range.start;
        if len == 0 {
            return Ok(Vec::new());
        }
        Ok(FibIterator::from_index(range.start)
            .take(len as usize)
            .collect())
    }

    fn name(&self) -> &'static str {
        "Incremental"
    }

    fn algorithm(&self) -> &'static str {
        FastDoubling::NAME
    }
}

/// Independent per-index calls spread over the rayon pool.
pub struct ParallelGenerator {
    calculator: Arc<dyn Calculator>,
}

impl ParallelGenerator {
    /// Generator backed by the given calculator.
    #[must_use]
    pub fn new(calculator: Arc<dyn Calculator>) -> Self {
        Self { calculator }
    }
}

impl Default for ParallelGenerator {
    fn default() -> Self {
        Self::new(default_calculator())
    }
}

impl SequenceGenerator for ParallelGenerator {
    fn generate(&self, start: FibIndex, end: FibIndex) -> Result<Vec<(u64, BigUint)>, FibError> {
        let range = check_range(start, end)?;
        debug!(
            start = range.start,
            end = range.end,
            threads = rayon::current_num_threads(),
            "generating sequence in parallel"
        );
        Ok(range
            .into_par_iter()
            .map(|i| (i, self.calculator.calculate(FibIndex::new(i))))
            .collect())
    }

    fn name(&self) -> &'static str {
        "Parallel"
    }

    fn algorithm(&self) -> &str {
        self.calculator.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fastdoubling::fib_pair;
    use crate::memo::MemoizedDoubling;

    fn idx(n: u64) -> FibIndex {
        FibIndex::new(n)
    }

    fn generators() -> Vec<Box<dyn SequenceGenerator>> {
        vec![
            Box::new(IndependentGenerator::default()),
            Box::new(IncrementalGenerator::new()),
            Box::new(ParallelGenerator::default()),
        ]
    }

    #[test]
    fn empty_range() {
        for g in generators() {
            assert!(g.generate(idx(0), idx(0)).unwrap().is_empty(), "{}", g.name());
            assert!(g.generate(idx(7), idx(7)).unwrap().is_empty(), "{}", g.name());
        }
    }

    #[test]
    fn reversed_range_rejected() {
        for g in generators() {
            assert!(
                matches!(g.generate(idx(5), idx(2)), Err(FibError::InvalidArgument(_))),
                "{}",
                g.name()
            );
        }
    }

    #[test]
    fn first_values() {
        let expected: Vec<(u64, BigUint)> = [0u32, 1, 1, 2, 3, 5, 8, 13]
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i as u64, BigUint::from(v)))
            .collect();
        for g in generators() {
            assert_eq!(g.generate(idx(0), idx(8)).unwrap(), expected, "{}", g.name());
        }
    }

    #[test]
    fn generators_agree_across_table_boundary() {
        let reference = IndependentGenerator::default()
            .generate(idx(80), idx(130))
            .unwrap();
        assert_eq!(reference.first().map(|(i, _)| *i), Some(80));
        assert_eq!(reference.last().map(|(i, _)| *i), Some(129));
        for g in generators() {
            assert_eq!(g.generate(idx(80), idx(130)).unwrap(), reference, "{}", g.name());
        }
    }

    #[test]
    fn reports_backing_algorithm() {
        assert_eq!(IncrementalGenerator::new().algorithm(), "FastDoubling");
        assert_eq!(IndependentGenerator::default().algorithm(), "FastDoubling");
        let memo = Arc::new(FibCalculator::new(Arc::new(MemoizedDoubling::new())));
        assert_eq!(ParallelGenerator::new(memo).algorithm(), "MemoizedDoubling");
    }

    #[test]
    fn parallel_preserves_order_with_memo_backend() {
        let memo = Arc::new(FibCalculator::new(Arc::new(MemoizedDoubling::new())));
        let values = ParallelGenerator::new(memo).generate(idx(0), idx(300)).unwrap();
        for (pos, (i, value)) in values.into_iter().enumerate() {
            assert_eq!(i, pos as u64);
            assert_eq!(value, fib_pair(i).0);
        }
    }
}
