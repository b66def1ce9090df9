//! Least Recently Used (LRU) replacement policy.
//!
//! Evicts the line that has gone longest without an access. Each set keeps
//! a usage stack: an accessed way moves to the top (most recently used), so
//! the bottom of the stack is always the eviction candidate.

use super::ReplacementPolicy;

/// LRU policy state.
#[derive(Debug)]
pub struct LruPolicy {
    /// One usage stack per set; index 0 is MRU, the last index is LRU.
    usage: Vec<Vec<usize>>,
}

impl LruPolicy {
    /// Creates an LRU policy for `sets` sets of `ways` ways each.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            usage: (0..sets).map(|_| (0..ways).collect()).collect(),
        }
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Moves the accessed `way` to the MRU position of its set's stack.
    fn update(&mut self, set: usize, way: usize) {
        let stack = &mut self.usage[set];
        if let Some(pos) = stack.iter().position(|&w| w == way) {
            let _ = stack.remove(pos);
        }
        stack.insert(0, way);
    }

    /// Returns the way at the bottom of the stack (the LRU position).
    fn get_victim(&mut self, set: usize) -> usize {
        self.usage[set].last().copied().unwrap_or(0)
    }
}
