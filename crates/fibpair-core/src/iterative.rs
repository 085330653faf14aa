//! Iterative Fast Doubling.
//!
//! Same identities as [`crate::fastdoubling`], but walks the bits of `n`
//! from MSB to LSB instead of recursing, reusing its registers between
//! steps.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::calculator::CoreCalculator;

/// Registers for one doubling run.
struct DoublingState {
    /// Current F(k).
    fk: BigUint,
    /// Current F(k+1).
    fk1: BigUint,
    /// Scratch register for `2*F(k+1) - F(k)`.
    t: BigUint,
}

impl DoublingState {
    fn new() -> Self {
        Self {
            fk: BigUint::zero(),
            fk1: BigUint::one(),
            t: BigUint::zero(),
        }
    }

    /// Advance k -> 2k.
    fn double(&mut self) {
        self.t.clone_from(&self.fk1);
        self.t <<= 1u32;
        self.t -= &self.fk;

        let f2k = &self.fk * &self.t;
        let f2k1 = &self.fk * &self.fk + &self.fk1 * &self.fk1;
        self.fk = f2k;
        self.fk1 = f2k1;
    }

    /// Advance k -> k+1.
    fn step(&mut self) {
        // fk takes old fk1; fk1 becomes old fk + old fk1.
        std::mem::swap(&mut self.fk, &mut self.fk1);
        self.fk1 += &self.fk;
    }
}

/// MSB-first iterative fast doubling calculator.
#[derive(Debug, Default, Clone, Copy)]
pub struct IterativeDoubling;

impl IterativeDoubling {
    /// Create a new `IterativeDoubling` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CoreCalculator for IterativeDoubling {
    fn calculate_core(&self, n: u64) -> BigUint {
        let num_bits = 64 - n.leading_zeros();
        let mut state = DoublingState::new();

        for i in (0..num_bits).rev() {
            state.double();
            if (n >> i) & 1 == 1 {
                state.step();
            }
        }

        std::mem::take(&mut state.fk)
    }

    fn name(&self) -> &'static str {
        "IterativeDoubling"
    }
}
