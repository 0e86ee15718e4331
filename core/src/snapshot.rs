//! Snapshot - Save/Restore Generator State
//!
//! Serializable capture of the full generator state for checkpointing and
//! replay. A restored generator continues the exact sequence the captured
//! one would have produced.
//!
//! # Critical Invariants
//!
//! - **Determinism**: snapshot + restore never changes the output stream
//! - **Zero rejection**: the absorbing all-zero state cannot be restored

use serde::{Deserialize, Serialize};

use crate::error::RngError;
use crate::generator::{Core, Xorshift128, Xorshift32, XorshiftRng};

/// Complete generator state snapshot, one variant per algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RngState {
    /// State of a four-word xorshift128 generator.
    Xorshift128 { x: u32, y: u32, z: u32, w: u32 },

    /// State of a one-word xorshift32 generator.
    Xorshift32 { word: u32 },
}

impl XorshiftRng {
    /// Capture the current state for checkpointing or replay.
    ///
    /// # Example
    /// ```
    /// use xorshift_rng_core_rs::XorshiftRng;
    ///
    /// let mut rng = XorshiftRng::new([1, 2, 3, 4]);
    /// rng.next_u32();
    ///
    /// let state = rng.snapshot();
    /// let mut resumed = XorshiftRng::restore(state).unwrap();
    /// assert_eq!(resumed.next_u32(), rng.next_u32());
    /// ```
    pub fn snapshot(&self) -> RngState {
        match &self.core {
            Core::Xorshift128(core) => {
                let [x, y, z, w] = core.words();
                RngState::Xorshift128 { x, y, z, w }
            }
            Core::Xorshift32(core) => RngState::Xorshift32 { word: core.word() },
        }
    }

    /// Rebuild a generator from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::ZeroState`] if every word in the snapshot is
    /// zero; that state is absorbing and no valid generator can reach it.
    pub fn restore(state: RngState) -> Result<Self, RngError> {
        let core = match state {
            RngState::Xorshift128 { x, y, z, w } => {
                if (x, y, z, w) == (0, 0, 0, 0) {
                    return Err(RngError::ZeroState);
                }
                Core::Xorshift128(Xorshift128::from_words([x, y, z, w]))
            }
            RngState::Xorshift32 { word } => {
                if word == 0 {
                    return Err(RngError::ZeroState);
                }
                Core::Xorshift32(Xorshift32::from_word(word))
            }
        };
        Ok(Self { core })
    }
}
