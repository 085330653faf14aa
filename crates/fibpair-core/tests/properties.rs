//! Property-based tests for the core Fibonacci algorithms.
//!
//! These tests exercise the `CoreCalculator` implementations directly
//! (without the `FibCalculator` table fast path) and the public entry points.

use num_bigint::BigUint;
use proptest::prelude::*;

use fibpair_core::calculator::CoreCalculator;
use fibpair_core::fastdoubling::FastDoubling;
use fibpair_core::iterative::IterativeDoubling;
use fibpair_core::iterator::LinearIteration;
use fibpair_core::memo::MemoizedDoubling;
use fibpair_core::{compute_fibonacci, compute_fibonacci_sequence, FibError};

fn fib(n: u64) -> BigUint {
    compute_fibonacci(n).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// For random n, all core algorithms agree with the linear oracle.
    #[test]
    fn all_core_algorithms_agree(n in 0u64..3000) {
        let expected = LinearIteration::new().calculate_core(n);

        prop_assert_eq!(&FastDoubling::new().calculate_core(n), &expected, "FastDoubling at n={}", n);
        prop_assert_eq!(&IterativeDoubling::new().calculate_core(n), &expected, "IterativeDoubling at n={}", n);
        prop_assert_eq!(&MemoizedDoubling::new().calculate_core(n), &expected, "MemoizedDoubling at n={}", n);
    }

    /// F(n) == F(n-1) + F(n-2) for n >= 2.
    #[test]
    fn recurrence_holds(n in 2u64..5000) {
        prop_assert_eq!(fib(n), fib(n - 1) + fib(n - 2), "recurrence at n={}", n);
    }

    /// F(2k) == F(k) * (2*F(k+1) - F(k)).
    #[test]
    fn doubling_identity(k in 0u64..5000) {
        let fk = fib(k);
        let fk1 = fib(k + 1);
        prop_assert_eq!(fib(2 * k), &fk * ((fk1 << 1u32) - &fk), "doubling at k={}", k);
    }

    /// F(2k+1) == F(k)^2 + F(k+1)^2.
    #[test]
    fn odd_doubling_identity(k in 0u64..5000) {
        let fk = fib(k);
        let fk1 = fib(k + 1);
        prop_assert_eq!(fib(2 * k + 1), &fk * &fk + &fk1 * &fk1, "odd doubling at k={}", k);
    }

    /// seq(n)[i] == F(i).
    #[test]
    fn sequence_consistency(n in 0u32..400) {
        let seq = compute_fibonacci_sequence(n).unwrap();
        prop_assert_eq!(seq.len(), n as usize);
        for (i, value) in seq.iter().enumerate() {
            prop_assert_eq!(value, &fib(i as u64), "seq[{}]", i);
        }
    }

    /// Negative integers are rejected.
    #[test]
    fn negative_rejected(n in i64::MIN..0) {
        prop_assert!(matches!(compute_fibonacci(n), Err(FibError::InvalidArgument(_))));
        prop_assert!(matches!(compute_fibonacci_sequence(n), Err(FibError::InvalidArgument(_))));
    }

    /// Floats with a fractional part are rejected.
    #[test]
    fn fractional_rejected(whole in 0u32..100_000, frac in 0.001f64..0.999) {
        let n = f64::from(whole) + frac;
        prop_assert!(matches!(compute_fibonacci(n), Err(FibError::InvalidArgument(_))));
    }

    /// Integral floats behave like the integer they hold.
    #[test]
    fn integral_float_accepted(n in 0u32..2000) {
        prop_assert_eq!(compute_fibonacci(f64::from(n)).unwrap(), fib(u64::from(n)));
    }
}

#[test]
fn scenario_table() {
    let cases: [(u64, &str); 7] = [
        (0, "0"),
        (1, "1"),
        (2, "1"),
        (10, "55"),
        (20, "6765"),
        (50, "12586269025"),
        (100, "354224848179261915075"),
    ];
    for (n, expected) in cases {
        assert_eq!(fib(n).to_string(), expected, "F({n})");
    }
}

#[test]
fn string_index_rejected() {
    let value = serde_json::json!("3");
    assert!(matches!(
        compute_fibonacci(&value),
        Err(FibError::InvalidArgument(_))
    ));
}
