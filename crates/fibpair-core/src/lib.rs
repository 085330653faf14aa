//! # fibpair-core
//!
//! Exact Fibonacci numbers by fast doubling.
//!
//! The entry points are [`compute_fibonacci`] and
//! [`compute_fibonacci_sequence`]. Both validate their index before doing
//! any arithmetic and fail with [`FibError::InvalidArgument`] when it is not
//! a non-negative integer.

pub mod calculator;
pub mod constants;
pub mod error;
pub mod fastdoubling;
pub mod index;
pub mod iterative;
pub mod iterator;
pub mod memo;
pub mod registry;
pub mod sequence;

// Re-exports
pub use calculator::{Calculator, CoreCalculator, FibCalculator};
pub use constants::{exit_codes, FIB_TABLE, MAX_FIB_U64};
pub use error::FibError;
pub use index::FibIndex;
pub use registry::{CalculatorFactory, DefaultFactory};
pub use sequence::SequenceGenerator;

use num_bigint::BigUint;

use sequence::IncrementalGenerator;

/// Compute F(n) exactly.
///
/// `n` may be any type convertible into a [`FibIndex`]: unsigned integers
/// always succeed, signed integers and floats are checked.
///
/// # Example
/// ```
/// use fibpair_core::{compute_fibonacci, FibError};
///
/// assert_eq!(compute_fibonacci(10u32).unwrap().to_string(), "55");
/// assert_eq!(compute_fibonacci(100i64).unwrap().to_string(), "354224848179261915075");
/// assert!(matches!(compute_fibonacci(-1i32), Err(FibError::InvalidArgument(_))));
/// assert!(matches!(compute_fibonacci(2.5f64), Err(FibError::InvalidArgument(_))));
/// ```
pub fn compute_fibonacci<N>(n: N) -> Result<BigUint, FibError>
where
    N: TryInto<FibIndex>,
    FibError: From<N::Error>,
{
    let n: FibIndex = n.try_into()?;
    Ok(fibonacci(n.get()))
}

/// Compute `[F(0), F(1), ..., F(n-1)]`. `n == 0` yields an empty vector.
///
/// # Example
/// ```
/// let seq = fibpair_core::compute_fibonacci_sequence(6u8).unwrap();
/// let text: Vec<String> = seq.iter().map(ToString::to_string).collect();
/// assert_eq!(text, ["0", "1", "1", "2", "3", "5"]);
/// ```
pub fn compute_fibonacci_sequence<N>(n: N) -> Result<Vec<BigUint>, FibError>
where
    N: TryInto<FibIndex>,
    FibError: From<N::Error>,
{
    let n: FibIndex = n.try_into()?;
    let values = IncrementalGenerator::new().generate(FibIndex::ZERO, n)?;
    Ok(values.into_iter().map(|(_, value)| value).collect())
}

/// Compute F(n) for an index that is valid by construction.
///
/// # Example
/// ```
/// assert_eq!(fibpair_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibpair_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    fastdoubling::fib_pair(n).0
}

/// Compute `(F(n), F(n+1))`.
#[must_use]
pub fn fibonacci_pair(n: u64) -> (BigUint, BigUint) {
    fastdoubling::fib_pair(n)
}
