//! Constants for the fast path, caching, and process exit codes.

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Default number of `(F(k), F(k+1))` pairs kept by `MemoizedDoubling`.
pub const DEFAULT_MEMO_CAPACITY: usize = 4096;

/// Sequences at least this long get a progress bar in the CLI.
pub const SEQUENCE_PROGRESS_THRESHOLD: u64 = 64;

/// Precomputed Fibonacci values for n = 0..=93 (fast path).
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`. F(94) = 19,740,274,219,868,223,167 overflows
/// `u64::MAX` (18,446,744,073,709,551,615).
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes of the `fibpair` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O and the like).
    pub const ERROR_GENERIC: i32 = 1;
    /// The index was not a non-negative integer.
    pub const ERROR_INVALID_ARGUMENT: i32 = 2;
    /// Algorithm results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
