//! Core orchestration: timed execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, info};

use fibpair_core::{Calculator, FibError, FibIndex, SequenceGenerator};

use crate::interfaces::{CalculationResult, SequenceResult};

fn run_one(calc: &dyn Calculator, n: FibIndex) -> CalculationResult {
    let start = Instant::now();
    let value = calc.calculate(n);
    let duration = start.elapsed();
    debug!(algorithm = calc.name(), %n, ?duration, bits = value.bits(), "calculation finished");
    CalculationResult {
        algorithm: calc.name().to_string(),
        value,
        duration,
    }
}

/// Execute calculations with all given calculators.
///
/// A single calculator runs on the calling thread; several run in parallel
/// on the rayon pool. Results come back in input order.
pub fn execute_calculations(
    calculators: &[Arc<dyn Calculator>],
    n: FibIndex,
) -> Vec<CalculationResult> {
    if let [calc] = calculators {
        return vec![run_one(calc.as_ref(), n)];
    }

    info!(count = calculators.len(), %n, "running calculators in parallel");
    calculators
        .par_iter()
        .map(|calc| run_one(calc.as_ref(), n))
        .collect()
}

/// Generate F(0)..F(n-1) with the given generator.
pub fn execute_sequence(
    generator: &dyn SequenceGenerator,
    n: FibIndex,
) -> Result<SequenceResult, FibError> {
    let start = Instant::now();
    let values = generator.generate(FibIndex::ZERO, n)?;
    let duration = start.elapsed();
    debug!(
        generator = generator.name(),
        algorithm = generator.algorithm(),
        %n,
        ?duration,
        "sequence generated"
    );
    Ok(SequenceResult {
        generator: generator.name().to_string(),
        algorithm: generator.algorithm().to_string(),
        values: values.into_iter().map(|(_, value)| value).collect(),
        duration,
    })
}

/// Analyze comparison results for mismatches.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), FibError> {
    let Some((first, rest)) = results.split_first() else {
        return Err(FibError::Config("no results to compare".into()));
    };

    // Compare all results to the first one
    for result in rest {
        if result.value != first.value {
            return Err(FibError::Mismatch {
                expected: first.algorithm.clone(),
                found: result.algorithm.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use fibpair_core::sequence::{IncrementalGenerator, ParallelGenerator};
    use fibpair_core::{CalculatorFactory, DefaultFactory};
    use num_bigint::BigUint;

    fn result(algorithm: &str, value: u32) -> CalculationResult {
        CalculationResult {
            algorithm: algorithm.into(),
            value: BigUint::from(value),
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn execute_single_calculator() {
        let factory = DefaultFactory::new();
        let calc = factory.get("fast").unwrap();
        let results = execute_calculations(&[calc], FibIndex::new(100));
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].value,
            BigUint::parse_bytes(b"354224848179261915075", 10).unwrap()
        );
    }

    #[test]
    fn execute_all_calculators_in_order() {
        let factory = DefaultFactory::new();
        let calcs: Vec<_> = factory
            .available()
            .into_iter()
            .map(|name| factory.get(name).unwrap())
            .collect();
        let results = execute_calculations(&calcs, FibIndex::new(500));
        let names: Vec<_> = results.iter().map(|r| r.algorithm.as_str()).collect();
        assert_eq!(
            names,
            ["FastDoubling", "IterativeDoubling", "MemoizedDoubling", "LinearIteration"]
        );
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn execute_sequence_values() {
        let seq = execute_sequence(&IncrementalGenerator::new(), FibIndex::new(11)).unwrap();
        assert_eq!(seq.generator, "Incremental");
        assert_eq!(seq.algorithm, "FastDoubling");
        assert_eq!(seq.values.len(), 11);
        assert_eq!(seq.values[10], BigUint::from(55u32));

        let linear = DefaultFactory::new().get("linear").unwrap();
        let par = execute_sequence(&ParallelGenerator::new(linear), FibIndex::new(11)).unwrap();
        assert_eq!(par.algorithm, "LinearIteration");
        assert_eq!(par.values, seq.values);
    }

    #[test]
    fn execute_empty_sequence() {
        let seq = execute_sequence(&IncrementalGenerator::new(), FibIndex::ZERO).unwrap();
        assert!(seq.values.is_empty());
    }

    #[test]
    fn analyze_matching_results() {
        let results = vec![result("A", 55), result("B", 55)];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_mismatching_results() {
        let results = vec![result("A", 55), result("B", 55), result("C", 56)];
        assert_eq!(
            analyze_comparison_results(&results),
            Err(FibError::Mismatch {
                expected: "A".into(),
                found: "C".into(),
            })
        );
    }

    #[test]
    fn analyze_no_results() {
        assert!(matches!(
            analyze_comparison_results(&[]),
            Err(FibError::Config(_))
        ));
    }
}
