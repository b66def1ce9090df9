//! Seedable random replacement policy.
//!
//! Evicts a pseudo-randomly chosen slot. Uses an xorshift generator seeded
//! at construction so eviction outcomes are reproducible in tests; there is
//! no process-wide random state.

use super::ReplacementPolicy;

/// Random policy state.
#[derive(Debug)]
pub struct RandomPolicy {
    /// Number of ways in each set.
    ways: usize,
    /// Generator state; never zero (xorshift's fixed point).
    state: u64,
}

impl RandomPolicy {
    /// Creates a Random policy for sets of `ways` ways, seeded with `seed`.
    ///
    /// A zero seed is replaced by a fixed nonzero constant.
    pub fn new(_sets: usize, ways: usize, seed: u64) -> Self {
        Self {
            ways,
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }
}

impl ReplacementPolicy for RandomPolicy {
    /// Access patterns do not affect random selection; no-op.
    fn update(&mut self, _set: usize, _way: usize) {}

    /// Advances the generator and maps its output to a way index.
    fn get_victim(&mut self, _set: usize) -> usize {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x as usize) % self.ways
    }
}
