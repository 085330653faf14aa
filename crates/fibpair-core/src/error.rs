//! Error type shared by the fibpair crates.

use std::convert::Infallible;

/// Error type for Fibonacci calculations.
///
/// `compute_fibonacci` and `compute_fibonacci_sequence` only ever return
/// [`FibError::InvalidArgument`]; the other variants come from calculator
/// lookup and cross-validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The index is not a non-negative integer.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different algorithms don't match.
    #[error("result mismatch: {expected} disagrees with {found}")]
    Mismatch {
        /// Algorithm whose result was taken as reference.
        expected: String,
        /// Algorithm that produced a different value.
        found: String,
    },
}

impl FibError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl From<Infallible> for FibError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
