//! xorshift128 core
//!
//! Marsaglia's four-word xorshift recurrence. Period is 2^128 - 1 and the
//! output passes standard statistical test suites for non-cryptographic
//! use.
//!
//! # Batched generation
//!
//! `fill` advances the recurrence four steps per loop iteration by
//! computing the four shift terms up front and folding them through the
//! state update. This is a re-association of `step`, not a different
//! algorithm: one unrolled pass emits exactly the next four outputs a
//! scalar loop would, and leaves the state where four scalar steps would
//! leave it. The remainder of a fill that is not a multiple of four is
//! handled by a scalar tail.

/// Four-word xorshift state.
///
/// At least one word is non-zero; constructors enforce this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Xorshift128 {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
}

impl Xorshift128 {
    /// Create a core from a seed, coercing the absorbing all-zero seed to
    /// a fixed non-zero state.
    pub(crate) fn new(seed: [u32; 4]) -> Self {
        let [x, y, z, w] = seed;
        if seed == [0; 4] {
            // All-zero is absorbing (xorshift requirement)
            Self { x, y, z, w: 1 }
        } else {
            Self { x, y, z, w }
        }
    }

    /// Rebuild a core from checkpointed words.
    ///
    /// Callers guarantee at least one word is non-zero.
    pub(crate) fn from_words(words: [u32; 4]) -> Self {
        let [x, y, z, w] = words;
        Self { x, y, z, w }
    }

    pub(crate) fn words(&self) -> [u32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Advance the recurrence one step and return the next output word.
    pub(crate) fn step(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w = (self.w ^ (self.w >> 19)) ^ (t ^ (t >> 8));
        self.w
    }

    /// Fill `out` with the next `out.len()` output words.
    ///
    /// Bit-identical to calling `step` in a loop, for every length.
    pub(crate) fn fill(&mut self, out: &mut [u32]) {
        let mut chunks = out.chunks_exact_mut(4);
        for chunk in chunks.by_ref() {
            let t1 = self.x ^ (self.x << 11);
            let t2 = self.y ^ (self.y << 11);
            let t3 = self.z ^ (self.z << 11);
            let t4 = self.w ^ (self.w << 11);
            self.x = (self.w ^ (self.w >> 19)) ^ (t1 ^ (t1 >> 8));
            self.y = (self.x ^ (self.x >> 19)) ^ (t2 ^ (t2 >> 8));
            self.z = (self.y ^ (self.y >> 19)) ^ (t3 ^ (t3 >> 8));
            self.w = (self.z ^ (self.z >> 19)) ^ (t4 ^ (t4 >> 8));
            chunk[0] = self.x;
            chunk[1] = self.y;
            chunk[2] = self.z;
            chunk[3] = self.w;
        }
        for slot in chunks.into_remainder() {
            *slot = self.step();
        }
    }
}
