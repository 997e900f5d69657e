//! Shared test fixtures.

pub use crate::aliases::*;

use num_bigint::BigUint;
use rand_core::{impls, Error, RngCore};

use crate::Unsigned;

/// Deterministic xorshift64* generator, good enough to spread test values.
pub struct XorShiftRng(u64);

impl XorShiftRng {
    pub fn new(seed: u64) -> Self {
        // the all-zero state is a fixed point
        Self(seed.wrapping_mul(0x9e37_79b9_7f4a_7c15) | 1)
    }
}

impl RngCore for XorShiftRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Reference value, for cross-checking against `num-bigint`.
pub fn to_biguint<const L: usize>(x: &Unsigned<L>) -> BigUint {
    BigUint::from_bytes_be(&x.to_be_bytes())
}
