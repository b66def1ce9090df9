//! Set-associative cache level.
//!
//! The non-terminal level of the hierarchy. A cache maps each line address
//! to a set (`tag % num_sets`), scans that set's slots for a resident tag,
//! and on a miss recurses into the next level, installing the fetched line
//! locally. Writes follow a write-back discipline: a dirty victim is pushed
//! to the next level before its slot is overwritten, and that recursive
//! write may itself evict one level further down.

use tracing::trace;

use crate::config::{CacheConfig, ReplacementPolicy as PolicyKind};
use crate::error::ConfigError;
use crate::level::{Counters, Geometry, Level};
use crate::line::CacheLine;
use crate::policies::{LfuPolicy, LruPolicy, RandomPolicy, ReplacementPolicy};

/// One slot of a set: a pre-allocated line plus a residency flag.
struct Slot {
    line: CacheLine,
    valid: bool,
}

/// Set-associative cache level with configurable replacement policy.
pub struct Cache {
    size_bytes: usize,
    line_width: usize,
    set_size: usize,
    num_sets: usize,
    slots: Vec<Vec<Slot>>,
    policy: Box<dyn ReplacementPolicy>,
    counters: Counters,
    next: Box<dyn Level>,
}

impl Cache {
    /// Creates a cache level in front of `next`.
    ///
    /// Slots are pre-allocated and zero-filled, invalid until first install.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any geometry field is zero or
    /// `size_bytes` is not divisible by `line_bytes × set_size`.
    pub fn new(config: &CacheConfig, next: Box<dyn Level>) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("size_bytes", config.size_bytes),
            ("line_bytes", config.line_bytes),
            ("set_size", config.set_size),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroGeometry { field });
            }
        }
        if config.size_bytes % (config.line_bytes * config.set_size) != 0 {
            return Err(ConfigError::InvalidGeometry {
                size_bytes: config.size_bytes,
                line_bytes: config.line_bytes,
                set_size: config.set_size,
            });
        }

        let num_sets = config.num_sets();
        let policy: Box<dyn ReplacementPolicy> = match config.policy {
            PolicyKind::Lru => Box::new(LruPolicy::new(num_sets, config.set_size)),
            PolicyKind::Lfu => Box::new(LfuPolicy::new(num_sets, config.set_size)),
            PolicyKind::Random => {
                Box::new(RandomPolicy::new(num_sets, config.set_size, config.seed))
            }
        };

        let slots = (0..num_sets)
            .map(|_| {
                (0..config.set_size)
                    .map(|_| Slot {
                        line: CacheLine::new(config.line_bytes),
                        valid: false,
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            size_bytes: config.size_bytes,
            line_width: config.line_bytes,
            set_size: config.set_size,
            num_sets,
            slots,
            policy,
            counters: Counters::default(),
            next,
        })
    }

    /// Set index for a block: `tag % num_sets`.
    fn set_index(&self, tag: u64) -> usize {
        (tag as usize) % self.num_sets
    }

    /// Scans a set for a resident line with the given tag.
    fn lookup(&self, set: usize, tag: u64) -> Option<usize> {
        self.slots[set]
            .iter()
            .position(|slot| slot.valid && slot.line.tag == tag)
    }
}

impl Level for Cache {
    fn read_line(&mut self, address: u64) -> CacheLine {
        let lw = self.line_width as u64;
        assert!(
            address % lw == 0,
            "cache read at {address:#x} not aligned to line width {lw}"
        );

        let tag = address / lw;
        let set = self.set_index(tag);

        if let Some(way) = self.lookup(set, tag) {
            self.policy.update(set, way);
            self.counters.r_hit += 1;
            return self.slots[set][way].line.clone();
        }

        // Not resident here; fetch from the next level and install the
        // copy locally (the install counts as this level's write).
        let line = self.next.read_line(address);
        self.write_line(address, &line);
        self.counters.r_miss += 1;
        line
    }

    fn write_line(&mut self, address: u64, line: &CacheLine) {
        let lw = self.line_width as u64;
        assert!(
            address % lw == 0,
            "cache write at {address:#x} not aligned to line width {lw}"
        );
        assert!(
            line.tag == address / lw,
            "cache write at {address:#x} carries tag {:#x}, expected {:#x}",
            line.tag,
            address / lw
        );

        let tag = line.tag;
        let set = self.set_index(tag);

        if let Some(way) = self.lookup(set, tag) {
            // Already resident; overwrite in place. The incoming dirty
            // flag wins.
            self.slots[set][way].line = line.clone();
            self.policy.update(set, way);
            self.counters.w_hit += 1;
            return;
        }

        // Fill an empty slot if the set has one; otherwise evict.
        let victim = match self.slots[set].iter().position(|slot| !slot.valid) {
            Some(way) => way,
            None => self.policy.get_victim(set),
        };

        if self.slots[set][victim].valid && self.slots[set][victim].line.dirty {
            // Dirty data is never dropped: push the victim down before
            // overwriting its slot.
            let victim_address = self.slots[set][victim].line.tag * lw;
            trace!(set, way = victim, address = victim_address, "writing back dirty victim");
            self.next
                .write_line(victim_address, &self.slots[set][victim].line);
        }

        self.slots[set][victim] = Slot {
            line: line.clone(),
            valid: true,
        };
        self.policy.update(set, victim);
        self.counters.w_miss += 1;
    }

    fn counters(&self) -> Counters {
        self.counters
    }

    fn reset_counters(&mut self) {
        self.counters = Counters::default();
    }

    fn geometry(&self) -> Geometry {
        Geometry {
            line_width: self.line_width,
            num_sets: self.num_sets,
            set_size: self.set_size,
            size_bytes: self.size_bytes,
        }
    }

    fn next_level(&self) -> Option<&dyn Level> {
        Some(self.next.as_ref())
    }

    fn next_level_mut(&mut self) -> Option<&mut dyn Level> {
        Some(self.next.as_mut())
    }

    fn peek_line(&self, set: usize, way: usize) -> Option<&CacheLine> {
        self.slots
            .get(set)?
            .get(way)
            .filter(|slot| slot.valid)
            .map(|slot| &slot.line)
    }

    fn peek_store(&self) -> Option<&[u8]> {
        None
    }
}
