//! Cache replacement policies.
//!
//! Implements victim selection for set-associative cache levels.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used.
//! - `Lfu`: Least Frequently Used.
//! - `Random`: Seedable pseudo-random selection.
//!
//! Recency and frequency metadata lives inside the policy (keyed by set and
//! way), not inside the lines themselves, so lines stay plain value types.

/// Least Frequently Used replacement policy.
pub mod lfu;

/// Least Recently Used replacement policy.
pub mod lru;

/// Seedable random replacement policy.
pub mod random;

pub use lfu::LfuPolicy;
pub use lru::LruPolicy;
pub use random::RandomPolicy;

/// Trait for cache replacement policies.
///
/// A cache calls [`update`](Self::update) on every hit and after every
/// install, and [`get_victim`](Self::get_victim) only when a full set needs
/// a slot freed; empty slots are filled before any victim is chosen.
pub trait ReplacementPolicy: Send + Sync {
    /// Records an access to `way` within `set`.
    fn update(&mut self, set: usize, way: usize);

    /// Selects the way to evict from a full `set`.
    fn get_victim(&mut self, set: usize) -> usize;
}
