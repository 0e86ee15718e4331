//! Xorshift generator state machines
//!
//! Two algorithm variants behind one owned generator type:
//!
//! - [`Algorithm::Xorshift128`]: four-word recurrence, period 2^128 - 1
//!   (default)
//! - [`Algorithm::Xorshift32`]: one-word recurrence, period 2^32 - 1
//!
//! The variant is selected at construction and fixed for the lifetime of
//! the generator. State is owned by the instance and mutated in place on
//! every draw; there is no locking. One instance per thread, or external
//! synchronization, for concurrent use.

mod rand;
mod xorshift128;
mod xorshift32;

use serde::{Deserialize, Serialize};

use crate::error::RngError;

pub(crate) use xorshift128::Xorshift128;
pub(crate) use xorshift32::Xorshift32;

/// Xorshift algorithm variant, selected at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// Four-word xorshift128, period 2^128 - 1.
    #[default]
    Xorshift128,

    /// One-word xorshift32, period 2^32 - 1. Lower footprint, shorter
    /// period.
    Xorshift32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Core {
    Xorshift128(Xorshift128),
    Xorshift32(Xorshift32),
}

/// Owned xorshift pseudorandom number generator.
///
/// Fills caller-provided buffers with raw words, uniform floats, or
/// normal floats. The generator never allocates in a fill path and never
/// retains a reference to the buffer.
///
/// # Determinism
///
/// Same seed produces the same sequence. Entropy-seeded generators
/// ([`XorshiftRng::from_entropy`]) are not reproducible across processes;
/// use [`XorshiftRng::new`] for reproducible streams.
///
/// # Example
/// ```
/// use xorshift_rng_core_rs::XorshiftRng;
///
/// let mut rng = XorshiftRng::new([1, 2, 3, 4]);
/// assert_eq!(rng.next_u32(), 2061);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorshiftRng {
    pub(crate) core: Core,
}

impl XorshiftRng {
    /// Create a deterministic xorshift128 generator from four seed words.
    ///
    /// The all-zero seed is absorbing and is coerced to a fixed non-zero
    /// state.
    ///
    /// # Example
    /// ```
    /// use xorshift_rng_core_rs::XorshiftRng;
    ///
    /// let mut a = XorshiftRng::new([1, 2, 3, 4]);
    /// let mut b = XorshiftRng::new([1, 2, 3, 4]);
    /// assert_eq!(a.next_u32(), b.next_u32());
    /// ```
    pub fn new(seed: [u32; 4]) -> Self {
        Self {
            core: Core::Xorshift128(Xorshift128::new(seed)),
        }
    }

    /// Create a deterministic xorshift32 generator from one seed word.
    ///
    /// A zero seed is coerced to a fixed non-zero state.
    pub fn new_xorshift32(seed: u32) -> Self {
        Self {
            core: Core::Xorshift32(Xorshift32::new(seed)),
        }
    }

    /// Create a xorshift128 generator seeded from operating system
    /// entropy.
    ///
    /// Re-draws until at least one seed word is non-zero.
    ///
    /// # Example
    /// ```
    /// use xorshift_rng_core_rs::XorshiftRng;
    ///
    /// let mut rng = XorshiftRng::from_entropy().expect("operating system entropy");
    /// let _word = rng.next_u32();
    /// ```
    pub fn from_entropy() -> Result<Self, RngError> {
        Self::with_algorithm(Algorithm::default())
    }

    /// Create an entropy-seeded generator with an explicit algorithm
    /// choice.
    pub fn with_algorithm(algorithm: Algorithm) -> Result<Self, RngError> {
        let core = match algorithm {
            Algorithm::Xorshift128 => {
                let mut words = [0u32; 4];
                loop {
                    for word in &mut words {
                        *word = entropy_word()?;
                    }
                    if words.iter().any(|&w| w != 0) {
                        break;
                    }
                }
                Core::Xorshift128(Xorshift128::from_words(words))
            }
            Algorithm::Xorshift32 => {
                let mut word = entropy_word()?;
                while word == 0 {
                    word = entropy_word()?;
                }
                Core::Xorshift32(Xorshift32::from_word(word))
            }
        };
        Ok(Self { core })
    }

    /// The algorithm variant this generator was constructed with.
    pub fn algorithm(&self) -> Algorithm {
        match self.core {
            Core::Xorshift128(_) => Algorithm::Xorshift128,
            Core::Xorshift32(_) => Algorithm::Xorshift32,
        }
    }

    /// Advance the state one step and return the next raw 32-bit word.
    pub fn next_u32(&mut self) -> u32 {
        match &mut self.core {
            Core::Xorshift128(core) => core.step(),
            Core::Xorshift32(core) => core.step(),
        }
    }

    /// Advance the state two steps and return a raw 64-bit word, first
    /// draw in the high half.
    pub fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32();
        let lo = self.next_u32();
        (u64::from(hi) << 32) | u64::from(lo)
    }

    /// Fill `out` with the next `out.len()` raw words.
    ///
    /// The xorshift128 path batches four recurrence steps per loop
    /// iteration with a scalar tail; output is bit-identical to drawing
    /// with [`XorshiftRng::next_u32`] in a loop. An empty slice is a
    /// no-op and consumes no draws.
    ///
    /// # Example
    /// ```
    /// use xorshift_rng_core_rs::XorshiftRng;
    ///
    /// let mut rng = XorshiftRng::new([1, 2, 3, 4]);
    /// let mut buf = [0u32; 6];
    /// rng.fill_raw(&mut buf);
    /// assert_eq!(buf[0], 2061);
    /// ```
    pub fn fill_raw(&mut self, out: &mut [u32]) {
        match &mut self.core {
            Core::Xorshift128(core) => core.fill(out),
            Core::Xorshift32(core) => core.fill(out),
        }
    }

    /// Allocating convenience over [`XorshiftRng::fill_raw`].
    pub fn generate_raw(&mut self, count: usize) -> Vec<u32> {
        let mut out = vec![0u32; count];
        self.fill_raw(&mut out);
        out
    }
}

fn entropy_word() -> Result<u32, RngError> {
    let mut buf = [0u8; 4];
    getrandom::getrandom(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}
