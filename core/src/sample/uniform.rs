//! Uniform transform
//!
//! One raw draw per output slot, rescaled into the caller's interval:
//! `value = (high - low) * (word / divisor) + low`.

use crate::generator::XorshiftRng;

use super::unit;

impl XorshiftRng {
    /// Fill `out` with floats uniform over `[low, high)`.
    ///
    /// Consumes exactly `out.len()` draws. Outputs lie in `[low, high)`
    /// barring floating-point rounding at the boundary. `low > high` is
    /// not an error: it produces a deterministic inverted range with
    /// unspecified ordering of the bounds. An empty slice is a no-op.
    ///
    /// # Example
    /// ```
    /// use xorshift_rng_core_rs::XorshiftRng;
    ///
    /// let mut rng = XorshiftRng::new([1, 2, 3, 4]);
    /// let mut buf = [0.0f32; 8];
    /// rng.fill_uniform(&mut buf, -1.0, 1.0);
    /// assert!(buf.iter().all(|&v| (-1.0..1.0).contains(&v)));
    /// ```
    pub fn fill_uniform(&mut self, out: &mut [f32], low: f32, high: f32) {
        let span = high - low;
        for slot in out.iter_mut() {
            *slot = span * unit(self.next_u32()) + low;
        }
    }

    /// Allocating convenience over [`XorshiftRng::fill_uniform`].
    pub fn generate_uniform(&mut self, count: usize, low: f32, high: f32) -> Vec<f32> {
        let mut out = vec![0.0; count];
        self.fill_uniform(&mut out, low, high);
        out
    }
}
