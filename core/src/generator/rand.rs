//! Integration with the rand ecosystem.
//!
//! Implements [`rand_core::RngCore`] and [`rand_core::SeedableRng`] so the
//! generator can drive any rand-based distribution or shuffle code.

use rand_core::{impls, Error, RngCore, SeedableRng};

use super::XorshiftRng;

impl RngCore for XorshiftRng {
    fn next_u32(&mut self) -> u32 {
        XorshiftRng::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        XorshiftRng::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorshiftRng {
    type Seed = [u8; 16];

    /// Build a xorshift128 generator from 16 little-endian seed bytes.
    ///
    /// An all-zero seed is coerced to a fixed non-zero state, as the
    /// `SeedableRng` contract requires.
    fn from_seed(seed: Self::Seed) -> Self {
        let words = [
            u32::from_le_bytes([seed[0], seed[1], seed[2], seed[3]]),
            u32::from_le_bytes([seed[4], seed[5], seed[6], seed[7]]),
            u32::from_le_bytes([seed[8], seed[9], seed[10], seed[11]]),
            u32::from_le_bytes([seed[12], seed[13], seed[14], seed[15]]),
        ];
        XorshiftRng::new(words)
    }
}
