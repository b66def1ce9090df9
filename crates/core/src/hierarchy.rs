//! Hierarchy orchestrator.
//!
//! Assembles the chain of cache levels over the terminal store and layers
//! byte- and word-granularity access on top of line operations. A byte or
//! word request is decomposed into its containing line address, the full
//! line is pulled through the first level (which transitively consults
//! lower levels on a miss), and for writes the mutated line is pushed back
//! through the first level marked dirty.

use tracing::debug;

use crate::cache::Cache;
use crate::config::{HierarchyConfig, WORD_BYTES};
use crate::error::ConfigError;
use crate::level::Level;
use crate::store::Store;

/// An ordered chain of cache levels terminating in a store.
///
/// The hierarchy is single-threaded and fully synchronous: every call,
/// including any depth of recursive eviction write-back, completes before
/// returning. Callers needing cross-thread access must serialize externally.
pub struct Hierarchy {
    first: Box<dyn Level>,
}

impl Hierarchy {
    /// Assembles a hierarchy from `config`, innermost level first.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails
    /// [`HierarchyConfig::validate`].
    pub fn new(config: &HierarchyConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let line_width = config.line_width();
        let mut level: Box<dyn Level> = Box::new(Store::new(config.store.size_bytes, line_width));
        for cache_config in config.levels.iter().rev() {
            level = Box::new(Cache::new(cache_config, level)?);
        }

        debug!(
            levels = config.levels.len(),
            line_width,
            store_bytes = config.store.size_bytes,
            "assembled memory hierarchy"
        );
        Ok(Self { first: level })
    }

    /// Assembles the default three-level chain.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] only if the built-in defaults are broken,
    /// which the test suite rules out.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::new(&HierarchyConfig::default())
    }

    /// Line width of the first level, which validation guarantees is the
    /// line width of every level.
    fn line_width(&self) -> u64 {
        self.first.geometry().line_width as u64
    }

    /// Reads one byte through the hierarchy.
    pub fn read_byte(&mut self, address: u64) -> u8 {
        let lw = self.line_width();
        let offset = (address % lw) as usize;
        let line = self.first.read_line(address - address % lw);
        line.bytes[offset]
    }

    /// Writes one byte through the hierarchy, marking its line dirty.
    pub fn write_byte(&mut self, address: u64, value: u8) {
        let lw = self.line_width();
        let offset = (address % lw) as usize;
        let line_address = address - address % lw;

        let mut line = self.first.read_line(line_address);
        line.bytes[offset] = value;
        line.dirty = true;
        self.first.write_line(line_address, &line);
    }

    /// Reads one little-endian 4-byte word through the hierarchy.
    ///
    /// # Panics
    ///
    /// Panics if the byte offset within the line is not 4-byte aligned; a
    /// word straddling two lines is unsupported.
    pub fn read_word(&mut self, address: u64) -> u32 {
        let lw = self.line_width();
        let offset = (address % lw) as usize;
        assert!(
            offset % WORD_BYTES == 0,
            "word read at {address:#x} straddles a line boundary"
        );

        let line = self.first.read_line(address - address % lw);
        let mut word = [0u8; WORD_BYTES];
        word.copy_from_slice(&line.bytes[offset..offset + WORD_BYTES]);
        u32::from_le_bytes(word)
    }

    /// Writes one little-endian 4-byte word through the hierarchy, marking
    /// its line dirty.
    ///
    /// # Panics
    ///
    /// Panics if the byte offset within the line is not 4-byte aligned; a
    /// word straddling two lines is unsupported.
    pub fn write_word(&mut self, address: u64, value: u32) {
        let lw = self.line_width();
        let offset = (address % lw) as usize;
        assert!(
            offset % WORD_BYTES == 0,
            "word write at {address:#x} straddles a line boundary"
        );
        let line_address = address - address % lw;

        let mut line = self.first.read_line(line_address);
        line.bytes[offset..offset + WORD_BYTES].copy_from_slice(&value.to_le_bytes());
        line.dirty = true;
        self.first.write_line(line_address, &line);
    }

    /// Zeroes every level's counters.
    ///
    /// Residency and dirty state are untouched; only accounting resets.
    pub fn reset_counters(&mut self) {
        let mut level: Option<&mut dyn Level> = Some(self.first.as_mut());
        while let Some(current) = level {
            current.reset_counters();
            level = current.next_level_mut();
        }
    }

    /// Iterates the chain from the first cache down to the store.
    ///
    /// Yields each level's full introspection surface (counters, geometry,
    /// peeks) without perturbing any state.
    pub fn levels(&self) -> impl Iterator<Item = &dyn Level> {
        let mut next: Option<&dyn Level> = Some(self.first.as_ref());
        std::iter::from_fn(move || {
            let current = next?;
            next = current.next_level();
            Some(current)
        })
    }

    /// The level at `index`, outermost first, including the store.
    pub fn level(&self, index: usize) -> Option<&dyn Level> {
        self.levels().nth(index)
    }

    /// Number of levels in the chain, including the store.
    pub fn depth(&self) -> usize {
        self.levels().count()
    }
}
