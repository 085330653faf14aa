//! Memoized Fast Doubling.
//!
//! Recursive doubling that keeps `(F(k), F(k+1))` pairs across calls in a
//! shared, bounded cache. Consecutive or repeated indices share most of
//! their recursion chain (`k, k/2, k/4, ...`), so warm calls skip the
//! expensive top-level multiplications.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use parking_lot::RwLock;
use tracing::debug;

use crate::calculator::CoreCalculator;
use crate::constants::DEFAULT_MEMO_CAPACITY;

/// Snapshot of cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to compute.
    pub misses: u64,
    /// Pairs currently stored.
    pub entries: usize,
}

/// Fast doubling with a thread-safe pair cache.
///
/// Once `capacity` pairs are stored the cache stops growing but keeps
/// serving hits. Results never depend on cache contents.
pub struct MemoizedDoubling {
    cache: RwLock<HashMap<u64, (BigUint, BigUint)>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoizedDoubling {
    /// Create a calculator with the default cache capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MEMO_CAPACITY)
    }

    /// Create a calculator keeping at most `capacity` pairs.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Compute `(F(k), F(k+1))`, consulting and filling the cache.
    pub fn pair(&self, k: u64) -> (BigUint, BigUint) {
        if k == 0 {
            return (BigUint::ZERO, BigUint::one());
        }

        if let Some(hit) = self.cache.read().get(&k) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return hit.clone();
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let (a, b) = self.pair(k / 2);
        let c = &a * ((&b << 1u32) - &a);
        let d = &a * &a + &b * &b;
        let result = if k.is_even() {
            (c, d)
        } else {
            let next = &c + &d;
            (d, next)
        };

        let mut cache = self.cache.write();
        if cache.len() < self.capacity {
            cache.insert(k, result.clone());
        }
        result
    }

    /// Number of cached pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Drop every cached pair and reset the counters.
    pub fn clear(&self) {
        let mut cache = self.cache.write();
        debug!(entries = cache.len(), "clearing fast doubling memo");
        cache.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Current cache counters.
    #[must_use]
    pub fn stats(&self) -> MemoStats {
        MemoStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

impl Default for MemoizedDoubling {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for MemoizedDoubling {
    fn calculate_core(&self, n: u64) -> BigUint {
        self.pair(n).0
    }

    fn name(&self) -> &'static str {
        "MemoizedDoubling"
    }
}
