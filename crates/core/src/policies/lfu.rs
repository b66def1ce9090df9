//! Least Frequently Used (LFU) replacement policy.
//!
//! Evicts the line with the smallest access count. Counts are kept per set
//! and way; choosing a victim zeroes that way's count so the incoming line
//! starts cold instead of inheriting the evicted line's history.

use super::ReplacementPolicy;

/// LFU policy state.
#[derive(Debug)]
pub struct LfuPolicy {
    /// Access counts, one vector of `ways` counts per set.
    counts: Vec<Vec<u64>>,
}

impl LfuPolicy {
    /// Creates an LFU policy for `sets` sets of `ways` ways each.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            counts: vec![vec![0; ways]; sets],
        }
    }
}

impl ReplacementPolicy for LfuPolicy {
    /// Increments the access count of `way` within `set`.
    fn update(&mut self, set: usize, way: usize) {
        self.counts[set][way] += 1;
    }

    /// Returns the way with the smallest count, resetting its count.
    ///
    /// Ties resolve to the lowest way index.
    fn get_victim(&mut self, set: usize) -> usize {
        let way = self.counts[set]
            .iter()
            .enumerate()
            .min_by_key(|&(_, count)| *count)
            .map_or(0, |(way, _)| way);
        self.counts[set][way] = 0;
        way
    }
}
