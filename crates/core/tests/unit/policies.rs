//! Cache Replacement Policy Tests.
//!
//! Verifies victim selection for LRU, LFU, and Random in isolation. Each
//! policy implements `ReplacementPolicy` with `update(set, way)` and
//! `get_victim(set) -> usize`.

use memsim_core::policies::{LfuPolicy, LruPolicy, RandomPolicy, ReplacementPolicy};
use pretty_assertions::assert_eq;

// ══════════════════════════════════════════════════════════
// 1. LRU Policy
// ══════════════════════════════════════════════════════════

/// With no accesses the stack is [0, 1, 2, 3]; the last way is the LRU.
#[test]
fn lru_initial_victim_is_last_way() {
    let mut policy = LruPolicy::new(1, 4);
    assert_eq!(policy.get_victim(0), 3);
}

/// Accessing ways in order 0,1,2,3 makes 0 the LRU.
#[test]
fn lru_sequential_access_reorders() {
    let mut policy = LruPolicy::new(1, 4);

    policy.update(0, 0);
    policy.update(0, 1);
    policy.update(0, 2);
    policy.update(0, 3);

    assert_eq!(policy.get_victim(0), 0);
}

/// Re-accessing a way promotes it to MRU and shifts the victim.
#[test]
fn lru_reaccess_promotes() {
    let mut policy = LruPolicy::new(1, 4);

    policy.update(0, 0);
    policy.update(0, 1);
    policy.update(0, 2);
    policy.update(0, 3);
    assert_eq!(policy.get_victim(0), 0);

    policy.update(0, 0);
    assert_eq!(policy.get_victim(0), 1);

    policy.update(0, 1);
    assert_eq!(policy.get_victim(0), 2);
}

/// Sets keep independent recency state.
#[test]
fn lru_sets_are_independent() {
    let mut policy = LruPolicy::new(2, 2);

    policy.update(0, 1);
    policy.update(0, 0);
    // Set 1 untouched: initial stack [0, 1].
    assert_eq!(policy.get_victim(0), 1);
    assert_eq!(policy.get_victim(1), 1);
}

// ══════════════════════════════════════════════════════════
// 2. LFU Policy
// ══════════════════════════════════════════════════════════

/// The way with the smallest access count is evicted; ties resolve to the
/// lowest way index.
#[test]
fn lfu_evicts_least_frequent() {
    let mut policy = LfuPolicy::new(1, 4);

    policy.update(0, 0); // count 1
    policy.update(0, 1); // count 3
    policy.update(0, 1);
    policy.update(0, 1);
    // Ways 2 and 3 untouched (count 0); tie resolves to way 2.
    assert_eq!(policy.get_victim(0), 2);
}

/// Choosing a victim zeroes its count so the incoming line starts cold.
#[test]
fn lfu_victim_count_resets() {
    let mut policy = LfuPolicy::new(1, 2);

    policy.update(0, 0); // counts [1, 0]
    assert_eq!(policy.get_victim(0), 1);

    // Way 1's count was reset; two accesses make it the hotter way.
    policy.update(0, 1);
    policy.update(0, 1);
    assert_eq!(policy.get_victim(0), 0);
}

// ══════════════════════════════════════════════════════════
// 3. Random Policy
// ══════════════════════════════════════════════════════════

/// Identical seeds replay the identical victim sequence.
#[test]
fn random_is_reproducible_for_seed() {
    let mut a = RandomPolicy::new(1, 4, 42);
    let mut b = RandomPolicy::new(1, 4, 42);

    let seq_a: Vec<usize> = (0..32).map(|_| a.get_victim(0)).collect();
    let seq_b: Vec<usize> = (0..32).map(|_| b.get_victim(0)).collect();
    assert_eq!(seq_a, seq_b);
}

/// Victims always fall inside the set, even for a zero seed.
#[test]
fn random_victims_stay_in_range() {
    let mut policy = RandomPolicy::new(1, 4, 0);

    for _ in 0..256 {
        assert!(policy.get_victim(0) < 4);
    }
}

/// Updates are a no-op for random selection: the sequence is unchanged
/// by intervening accesses.
#[test]
fn random_ignores_updates() {
    let mut a = RandomPolicy::new(1, 4, 7);
    let mut b = RandomPolicy::new(1, 4, 7);

    b.update(0, 0);
    b.update(0, 3);

    let seq_a: Vec<usize> = (0..8).map(|_| a.get_victim(0)).collect();
    let seq_b: Vec<usize> = (0..8).map(|_| b.get_victim(0)).collect();
    assert_eq!(seq_a, seq_b);
}
