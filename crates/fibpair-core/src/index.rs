//! Validated Fibonacci index.
//!
//! `FibIndex` is the only way an index enters a calculation. Every
//! conversion into it decides the "non-negative mathematical integer" rule
//! up front, so invalid input fails before any arithmetic starts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FibError;

/// 2^64 as an `f64`, the first float that no longer fits in a `u64`.
const U64_LIMIT_F64: f64 = 18_446_744_073_709_551_616.0;

/// A non-negative integer index into the Fibonacci sequence.
///
/// # Example
/// ```
/// use fibpair_core::FibIndex;
///
/// assert_eq!(FibIndex::try_from(10i64).unwrap().get(), 10);
/// assert!(FibIndex::try_from(-1i64).is_err());
/// assert!(FibIndex::try_from(2.5f64).is_err());
/// assert!("3.5".parse::<FibIndex>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u64", try_from = "Value")]
pub struct FibIndex(u64);

impl FibIndex {
    /// The index 0.
    pub const ZERO: Self = Self(0);

    /// Wrap an index that is valid by construction.
    #[must_use]
    pub const fn new(n: u64) -> Self {
        Self(n)
    }

    /// The raw index value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FibIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<FibIndex> for u64 {
    fn from(index: FibIndex) -> Self {
        index.0
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for FibIndex {
            fn from(n: $t) -> Self {
                Self(u64::from(n))
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64);

macro_rules! impl_try_from_wide_unsigned {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for FibIndex {
            type Error = FibError;

            fn try_from(n: $t) -> Result<Self, Self::Error> {
                u64::try_from(n)
                    .map(Self)
                    .map_err(|_| FibError::invalid(format!("index {n} exceeds the supported range")))
            }
        }
    )*};
}

impl_try_from_wide_unsigned!(usize, u128);

macro_rules! impl_try_from_signed {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for FibIndex {
            type Error = FibError;

            fn try_from(n: $t) -> Result<Self, Self::Error> {
                if n < 0 {
                    return Err(negative(n));
                }
                u64::try_from(n)
                    .map(Self)
                    .map_err(|_| FibError::invalid(format!("index {n} exceeds the supported range")))
            }
        }
    )*};
}

impl_try_from_signed!(i8, i16, i32, i64, isize, i128);

impl TryFrom<f64> for FibIndex {
    type Error = FibError;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn try_from(n: f64) -> Result<Self, Self::Error> {
        if !n.is_finite() || n.fract() != 0.0 {
            return Err(not_integer(n));
        }
        if n < 0.0 {
            return Err(negative(n));
        }
        if n >= U64_LIMIT_F64 {
            return Err(FibError::invalid(format!(
                "index {n} exceeds the supported range"
            )));
        }
        Ok(Self(n as u64))
    }
}

impl TryFrom<f32> for FibIndex {
    type Error = FibError;

    fn try_from(n: f32) -> Result<Self, Self::Error> {
        Self::try_from(f64::from(n))
    }
}

impl TryFrom<&Value> for FibIndex {
    type Error = FibError;

    /// Dynamically typed input: only JSON numbers with an integral value
    /// are indices. A string such as `"3"` is rejected, not parsed.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(num) => {
                if let Some(n) = num.as_u64() {
                    Ok(Self(n))
                } else if let Some(n) = num.as_i64() {
                    Self::try_from(n)
                } else if let Some(n) = num.as_f64() {
                    Self::try_from(n)
                } else {
                    Err(not_integer(num))
                }
            }
            Value::String(s) => Err(FibError::invalid(format!(
                "index must be an integer, got string {s:?}"
            ))),
            Value::Bool(b) => Err(not_integer(format!("boolean {b}"))),
            Value::Null => Err(not_integer("null")),
            Value::Array(_) => Err(not_integer("an array")),
            Value::Object(_) => Err(not_integer("an object")),
        }
    }
}

impl TryFrom<Value> for FibIndex {
    type Error = FibError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

impl FromStr for FibIndex {
    type Err = FibError;

    /// Parse a decimal integer literal, surrounding whitespace and a leading
    /// `+` allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FibError::invalid("index is empty"));
        }

        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return digits.parse::<u64>().map(Self).map_err(|_| {
                FibError::invalid(format!("index {digits} exceeds the supported range"))
            });
        }

        match trimmed.strip_prefix('-') {
            Some(rest) if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) => {
                Err(negative(trimmed))
            }
            _ => Err(FibError::invalid(format!(
                "index must be an integer, got {trimmed:?}"
            ))),
        }
    }
}

fn negative(n: impl fmt::Display) -> FibError {
    FibError::invalid(format!("index must be non-negative, got {n}"))
}

fn not_integer(n: impl fmt::Display) -> FibError {
    FibError::invalid(format!("index must be an integer, got {n}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn is_invalid<T>(r: Result<T, FibError>) -> bool {
        matches!(r, Err(FibError::InvalidArgument(_)))
    }

    #[test]
    fn unsigned_always_valid() {
        assert_eq!(FibIndex::from(0u8).get(), 0);
        assert_eq!(FibIndex::from(u32::MAX).get(), u64::from(u32::MAX));
        assert_eq!(FibIndex::from(u64::MAX).get(), u64::MAX);
        assert_eq!(FibIndex::try_from(7usize).unwrap().get(), 7);
    }

    #[test]
    fn wide_unsigned_out_of_range() {
        assert!(is_invalid(FibIndex::try_from(u128::from(u64::MAX) + 1)));
        assert_eq!(
            FibIndex::try_from(u128::from(u64::MAX)).unwrap().get(),
            u64::MAX
        );
    }

    #[test]
    fn signed_rejects_negative() {
        assert!(is_invalid(FibIndex::try_from(-1i64)));
        assert!(is_invalid(FibIndex::try_from(i32::MIN)));
        assert!(is_invalid(FibIndex::try_from(-1i128)));
        assert_eq!(FibIndex::try_from(0i8).unwrap(), FibIndex::ZERO);
        assert_eq!(FibIndex::try_from(50i64).unwrap().get(), 50);
    }

    #[test]
    fn negative_message() {
        let err = FibIndex::try_from(-1i64).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: index must be non-negative, got -1"
        );
    }

    #[test]
    fn float_integral_accepted() {
        assert_eq!(FibIndex::try_from(10.0f64).unwrap().get(), 10);
        assert_eq!(FibIndex::try_from(-0.0f64).unwrap().get(), 0);
        assert_eq!(FibIndex::try_from(3.0f32).unwrap().get(), 3);
    }

    #[test]
    fn float_rejected() {
        assert!(is_invalid(FibIndex::try_from(2.5f64)));
        assert!(is_invalid(FibIndex::try_from(-1.0f64)));
        assert!(is_invalid(FibIndex::try_from(f64::NAN)));
        assert!(is_invalid(FibIndex::try_from(f64::INFINITY)));
        assert!(is_invalid(FibIndex::try_from(1e20f64)));
        assert!(is_invalid(FibIndex::try_from(0.1f32)));
    }

    #[test]
    fn json_numbers() {
        assert_eq!(FibIndex::try_from(&json!(20)).unwrap().get(), 20);
        assert_eq!(FibIndex::try_from(&json!(4.0)).unwrap().get(), 4);
        assert!(is_invalid(FibIndex::try_from(&json!(-1))));
        assert!(is_invalid(FibIndex::try_from(&json!(2.5))));
    }

    #[test]
    fn json_non_numbers_rejected() {
        assert!(is_invalid(FibIndex::try_from(&json!("3"))));
        assert!(is_invalid(FibIndex::try_from(&json!(true))));
        assert!(is_invalid(FibIndex::try_from(&json!(null))));
        assert!(is_invalid(FibIndex::try_from(&json!([1]))));
        assert!(is_invalid(FibIndex::try_from(&json!({"n": 1}))));
    }

    #[test]
    fn json_string_message() {
        let err = FibIndex::try_from(&json!("3")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: index must be an integer, got string \"3\""
        );
    }

    #[test]
    fn parse_text() {
        assert_eq!("42".parse::<FibIndex>().unwrap().get(), 42);
        assert_eq!(" 7 ".parse::<FibIndex>().unwrap().get(), 7);
        assert_eq!("+9".parse::<FibIndex>().unwrap().get(), 9);
        assert_eq!("0".parse::<FibIndex>().unwrap(), FibIndex::ZERO);
    }

    #[test]
    fn parse_text_rejected() {
        for bad in ["", "   ", "-1", "2.5", "abc", "1e3", "+", "-", "0x10", "18446744073709551616"] {
            assert!(is_invalid(bad.parse::<FibIndex>()), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn parse_negative_message() {
        let err = "-5".parse::<FibIndex>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: index must be non-negative, got -5"
        );
    }

    #[test]
    fn serde_round_trip_goes_through_validation() {
        let idx: FibIndex = serde_json::from_str("12").unwrap();
        assert_eq!(idx.get(), 12);
        assert_eq!(serde_json::to_string(&idx).unwrap(), "12");
        assert!(serde_json::from_str::<FibIndex>("\"12\"").is_err());
        assert!(serde_json::from_str::<FibIndex>("-3").is_err());
    }

    #[test]
    fn display_matches_value() {
        assert_eq!(FibIndex::new(93).to_string(), "93");
    }
}
