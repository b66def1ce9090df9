//! The level contract shared by caches and the terminal store.
//!
//! This module defines the polymorphic seam of the hierarchy. It provides:
//! 1. **Level:** The uniform read/write-a-line operation every level implements.
//! 2. **Counters:** Per-level read/write hit and miss accounting.
//! 3. **Geometry:** Read-only description of a level's shape.
//!
//! The "next level" relation is always a reference to this abstraction;
//! introspection (counters, geometry, slot peeks) is part of the contract so
//! callers never need to downcast to a concrete level type.

use crate::line::CacheLine;

/// Per-level access counters.
///
/// Every `read_line` / `write_line` call increments exactly one counter on
/// the acting level, and never a downstream level's. Counters are reset as
/// a group and independently of cache content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Read requests served from this level.
    pub r_hit: u64,
    /// Read requests that had to consult the next level.
    pub r_miss: u64,
    /// Write requests that overwrote a resident line.
    pub w_hit: u64,
    /// Write requests that installed into a non-resident slot.
    pub w_miss: u64,
}

impl Counters {
    /// Total accesses recorded at this level.
    pub fn total(&self) -> u64 {
        self.r_hit + self.r_miss + self.w_hit + self.w_miss
    }

    /// Fraction of accesses that hit, or 0.0 with no traffic.
    pub fn hit_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            (self.r_hit + self.w_hit) as f64 / total as f64
        }
    }
}

/// Read-only shape of a level.
///
/// For the terminal store `num_sets` and `set_size` are zero; it has no set
/// structure, only a flat span of `size_bytes`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    /// Line width in bytes.
    pub line_width: usize,
    /// Number of sets (zero for the store).
    pub num_sets: usize,
    /// Slots per set (zero for the store).
    pub set_size: usize,
    /// Total capacity in bytes.
    pub size_bytes: usize,
}

/// Uniform contract for a level in the memory hierarchy.
///
/// Implementations must validate address alignment before anything else and,
/// on write, that the supplied line's tag matches the address. Violating
/// those preconditions is caller error and panics; see the crate-level error
/// handling notes.
pub trait Level {
    /// Reads the line at `address`, recursing into the next level on a miss.
    ///
    /// `address` must be a multiple of this level's line width. The
    /// returned line is an independent copy.
    fn read_line(&mut self, address: u64) -> CacheLine;

    /// Writes `line` at `address`, evicting and writing back as needed.
    ///
    /// `address` must be a multiple of this level's line width and
    /// `line.tag` must equal `address / line_width`.
    fn write_line(&mut self, address: u64, line: &CacheLine);

    /// Snapshot of this level's access counters.
    fn counters(&self) -> Counters;

    /// Zeroes this level's counters without touching residency or dirtiness.
    fn reset_counters(&mut self);

    /// This level's shape.
    fn geometry(&self) -> Geometry;

    /// The next level down, absent only for the terminal store.
    fn next_level(&self) -> Option<&dyn Level>;

    /// Mutable access to the next level down.
    fn next_level_mut(&mut self) -> Option<&mut dyn Level>;

    /// Non-mutating peek at the resident line in `set`/`way`.
    ///
    /// Returns `None` for empty slots, out-of-range indices, and the
    /// terminal store. Never perturbs counters, residency, dirtiness, or
    /// replacement metadata; this exists solely for external rendering.
    fn peek_line(&self, set: usize, way: usize) -> Option<&CacheLine>;

    /// Non-mutating peek at the terminal store's raw backing buffer.
    ///
    /// Returns `None` for cache levels.
    fn peek_store(&self) -> Option<&[u8]>;
}
