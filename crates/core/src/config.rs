//! Configuration for the memory hierarchy.
//!
//! This module defines the structures used to parameterize a hierarchy. It
//! provides:
//! 1. **Defaults:** Baseline geometry constants (level sizes, line width, store span).
//! 2. **Structures:** Per-level cache geometry, store span, and the chain as a whole.
//! 3. **Enums:** Replacement policy selection.
//!
//! Configuration is supplied via JSON ([`HierarchyConfig::from_json`]) or
//! built in code; `HierarchyConfig::default()` reproduces the classic
//! three-level L1/L2/L3 chain.

use serde::Deserialize;

use crate::error::ConfigError;

/// Word granularity of the hierarchy's word-level access operations.
pub const WORD_BYTES: usize = 4;

/// Default configuration constants for the hierarchy.
mod defaults {
    /// Default cache level size in bytes (4 KiB).
    pub const CACHE_SIZE: usize = 4096;

    /// Default cache line width in bytes.
    ///
    /// Matches typical modern processor cache line sizes.
    pub const CACHE_LINE: usize = 64;

    /// Default slots per set (4-way set-associative).
    pub const SET_SIZE: usize = 4;

    /// Default eviction seed for the Random policy.
    ///
    /// Any fixed nonzero value keeps eviction reproducible across runs.
    pub const EVICTION_SEED: u64 = 0x2545_F491_4F6C_DD1D;

    /// Default simulated store span in bytes (3.125 MiB; a 1024x800
    /// framebuffer of 32-bit pixels).
    pub const STORE_SIZE: usize = 3_276_800;
}

/// Cache replacement policy algorithms.
///
/// Selects which resident line to evict when a new line must be installed
/// into a full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplacementPolicy {
    /// Least Recently Used: evicts the line untouched for the longest time.
    #[default]
    #[serde(alias = "Lru")]
    Lru,
    /// Least Frequently Used: evicts the line with the fewest accesses.
    #[serde(alias = "Lfu")]
    Lfu,
    /// Random: evicts a pseudo-randomly selected slot (seedable).
    #[serde(alias = "Random")]
    Random,
}

/// Geometry and policy of one cache level.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Total capacity in bytes.
    #[serde(default = "CacheConfig::default_size")]
    pub size_bytes: usize,

    /// Line width in bytes.
    #[serde(default = "CacheConfig::default_line")]
    pub line_bytes: usize,

    /// Slots per set; 1 is direct-mapped, `size / line` is fully associative.
    #[serde(default = "CacheConfig::default_set_size")]
    pub set_size: usize,

    /// Replacement policy.
    #[serde(default)]
    pub policy: ReplacementPolicy,

    /// Seed for the Random policy's generator; ignored by LRU/LFU.
    #[serde(default = "CacheConfig::default_seed")]
    pub seed: u64,
}

impl CacheConfig {
    /// Returns the default cache level size in bytes.
    fn default_size() -> usize {
        defaults::CACHE_SIZE
    }

    /// Returns the default line width in bytes.
    fn default_line() -> usize {
        defaults::CACHE_LINE
    }

    /// Returns the default number of slots per set.
    fn default_set_size() -> usize {
        defaults::SET_SIZE
    }

    /// Returns the default eviction seed.
    fn default_seed() -> u64 {
        defaults::EVICTION_SEED
    }

    /// Derived number of sets: `size / (line × set size)`.
    pub fn num_sets(&self) -> usize {
        self.size_bytes / (self.line_bytes * self.set_size)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            size_bytes: defaults::CACHE_SIZE,
            line_bytes: defaults::CACHE_LINE,
            set_size: defaults::SET_SIZE,
            policy: ReplacementPolicy::default(),
            seed: defaults::EVICTION_SEED,
        }
    }
}

/// Span of the terminal backing store.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Size of the simulated address range in bytes.
    #[serde(default = "StoreConfig::default_size")]
    pub size_bytes: usize,
}

impl StoreConfig {
    /// Returns the default simulated store span.
    fn default_size() -> usize {
        defaults::STORE_SIZE
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            size_bytes: defaults::STORE_SIZE,
        }
    }
}

/// Full hierarchy configuration: an ordered list of cache levels, outermost
/// (closest to the caller) first, followed by exactly one store.
#[derive(Debug, Clone, Deserialize)]
pub struct HierarchyConfig {
    /// Cache levels, outermost first. May be empty for a store-only chain.
    #[serde(default = "HierarchyConfig::default_levels")]
    pub levels: Vec<CacheConfig>,

    /// Terminal store span.
    #[serde(default)]
    pub store: StoreConfig,
}

impl HierarchyConfig {
    /// Returns the classic three-level default chain: 4 KiB, 8 KiB, and
    /// 16 KiB caches with 64-byte lines, 4-way sets, and LRU eviction.
    fn default_levels() -> Vec<CacheConfig> {
        [defaults::CACHE_SIZE, defaults::CACHE_SIZE * 2, defaults::CACHE_SIZE * 4]
            .into_iter()
            .map(|size_bytes| CacheConfig {
                size_bytes,
                ..CacheConfig::default()
            })
            .collect()
    }

    /// Parses a hierarchy configuration from a JSON document and validates it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Line width shared by every level of the chain.
    ///
    /// Falls back to the default line width for a store-only chain.
    pub fn line_width(&self) -> usize {
        self.levels
            .first()
            .map_or(defaults::CACHE_LINE, |level| level.line_bytes)
    }

    /// Checks every geometry invariant the chain relies on.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any level has a zero geometry field, a
    /// size not divisible by `line × set size`, or a line width that differs
    /// from the first level's; or if the line width is not a multiple of the
    /// word size, or the store span is not a whole number of lines.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let line_width = self.line_width();

        for (index, level) in self.levels.iter().enumerate() {
            for (field, value) in [
                ("size_bytes", level.size_bytes),
                ("line_bytes", level.line_bytes),
                ("set_size", level.set_size),
            ] {
                if value == 0 {
                    return Err(ConfigError::ZeroGeometry { field });
                }
            }
            if level.size_bytes % (level.line_bytes * level.set_size) != 0 {
                return Err(ConfigError::InvalidGeometry {
                    size_bytes: level.size_bytes,
                    line_bytes: level.line_bytes,
                    set_size: level.set_size,
                });
            }
            if level.line_bytes != line_width {
                return Err(ConfigError::MismatchedLineWidth {
                    index,
                    got: level.line_bytes,
                    expected: line_width,
                });
            }
        }

        if line_width % WORD_BYTES != 0 {
            return Err(ConfigError::UnalignedLineWidth {
                line_bytes: line_width,
                word: WORD_BYTES,
            });
        }
        if self.store.size_bytes % line_width != 0 {
            return Err(ConfigError::UnalignedStore {
                size_bytes: self.store.size_bytes,
                line_bytes: line_width,
            });
        }

        Ok(())
    }
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            levels: Self::default_levels(),
            store: StoreConfig::default(),
        }
    }
}
