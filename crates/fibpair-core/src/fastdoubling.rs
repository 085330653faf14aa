//! Recursive Fast Doubling.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//!
//! `fib_pair(k)` returns `(F(k), F(k+1))` and recurses on `k / 2`, so the
//! recursion depth is bounded by the bit length of `k` (at most 64).

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

use crate::calculator::CoreCalculator;

/// Compute the pair `(F(k), F(k+1))`.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
///
/// let (f10, f11) = fibpair_core::fastdoubling::fib_pair(10);
/// assert_eq!(f10, BigUint::from(55u32));
/// assert_eq!(f11, BigUint::from(89u32));
/// ```
#[must_use]
pub fn fib_pair(k: u64) -> (BigUint, BigUint) {
    if k == 0 {
        return (BigUint::ZERO, BigUint::one());
    }

    let (a, b) = fib_pair(k / 2);
    // 2*F(k+1) >= F(k) for every k, so the subtraction cannot underflow.
    let c = &a * ((&b << 1u32) - &a);
    let d = &a * &a + &b * &b;

    if k.is_even() {
        (c, d)
    } else {
        let next = &c + &d;
        (d, next)
    }
}

/// Recursive fast doubling calculator.
///
/// # Example
/// ```
/// use fibpair_core::calculator::CoreCalculator;
/// use fibpair_core::fastdoubling::FastDoubling;
///
/// let calc = FastDoubling::new();
/// assert_eq!(calc.calculate_core(100).to_string(), "354224848179261915075");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FastDoubling;

impl FastDoubling {
    /// Name reported by [`CoreCalculator::name`].
    pub const NAME: &'static str = "FastDoubling";

    /// Create a new `FastDoubling` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CoreCalculator for FastDoubling {
    fn calculate_core(&self, n: u64) -> BigUint {
        fib_pair(n).0
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
