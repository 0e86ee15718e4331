//! Xorshift RNG Core - Rust Engine
//!
//! Fast, allocation-free pseudorandom number generation for numeric code.
//! Fills caller-provided buffers with raw 32-bit words, uniform floats over
//! an arbitrary interval, or normally distributed floats.
//!
//! # Architecture
//!
//! - **generator**: Xorshift state machines and raw word output
//! - **sample**: Uniform and normal transforms over raw words
//! - **snapshot**: Save/restore of generator state
//! - **error**: Error types
//!
//! # Critical Invariants
//!
//! 1. The all-zero state is absorbing and must never be reachable
//! 2. Same seed produces the same sequence (deterministic)
//! 3. Batched generation is bit-identical to scalar generation
//! 4. Fill operations never allocate and never retain the caller's buffer

// Module declarations
pub mod error;
pub mod generator;
pub mod snapshot;

mod sample;

// Re-exports for convenience
pub use error::RngError;
pub use generator::{Algorithm, XorshiftRng};
pub use snapshot::RngState;
