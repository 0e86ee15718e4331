//! Normal transform
//!
//! Box-Muller: two raw draws map to two open-unit values, which combine
//! into one standard-normal deviate:
//!
//! ```text
//! z = sqrt(-2 ln x1) * cos(2 pi x2)
//! sample = sigma * z + mu
//! ```
//!
//! Only the cosine branch is emitted; the companion sine deviate of each
//! pair is discarded. Every sample therefore consumes exactly two draws,
//! for even and odd fill lengths alike.

use std::f32::consts::TAU;

use crate::generator::XorshiftRng;

use super::open_unit;

impl XorshiftRng {
    /// Fill `out` with floats approximately distributed Normal(mu, sigma).
    ///
    /// Consumes exactly `2 * out.len()` draws for every length. Both
    /// uniforms are floored at the smallest positive float, so the
    /// logarithm never receives 0.
    ///
    /// `sigma == 0` produces `out.len()` copies of `mu`. A negative
    /// `sigma` mirrors the deviate, which only flips its sign; it is
    /// permitted. `mu` and `sigma` are accepted as given, with no NaN or
    /// infinity screening.
    ///
    /// # Example
    /// ```
    /// use xorshift_rng_core_rs::XorshiftRng;
    ///
    /// let mut rng = XorshiftRng::new([1, 2, 3, 4]);
    /// let mut buf = [0.0f32; 4];
    /// rng.fill_normal(&mut buf, 0.0, 0.0);
    /// assert_eq!(buf, [0.0; 4]);
    /// ```
    pub fn fill_normal(&mut self, out: &mut [f32], mu: f32, sigma: f32) {
        for slot in out.iter_mut() {
            let x1 = open_unit(self.next_u32());
            let x2 = open_unit(self.next_u32());
            let z = (-2.0 * x1.ln()).sqrt() * (TAU * x2).cos();
            *slot = sigma * z + mu;
        }
    }

    /// Allocating convenience over [`XorshiftRng::fill_normal`].
    pub fn generate_normal(&mut self, count: usize, mu: f32, sigma: f32) -> Vec<f32> {
        let mut out = vec![0.0; count];
        self.fill_normal(&mut out, mu, sigma);
        out
    }
}
