//! Error types for generator construction and state restore.

use thiserror::Error;

/// Errors that can occur while constructing or restoring a generator.
///
/// Fill operations themselves never fail; every draw is a fixed,
/// non-blocking computation.
#[derive(Debug, Error)]
pub enum RngError {
    /// The all-zero state is absorbing: a xorshift generator seeded with
    /// zeros stays at zero forever.
    #[error("generator state must contain at least one non-zero word")]
    ZeroState,

    /// The operating system refused to provide entropy for seeding.
    #[error("failed to read operating system entropy: {0}")]
    Entropy(#[from] getrandom::Error),
}
