//! Multi-level memory hierarchy simulator.
//!
//! This crate models a chain of fixed-geometry cache levels backed by a
//! terminal store, for architectural exploration. It provides:
//! 1. **Lines:** The unit of transfer between levels (tag, dirty flag, byte buffer).
//! 2. **Levels:** A uniform read/write-line contract implemented by caches and the store.
//! 3. **Caches:** Parametrized set-associative levels with eviction and write-back.
//! 4. **Policies:** Replacement algorithms (LRU, LFU, seedable Random).
//! 5. **Hierarchy:** Chain assembly plus byte- and word-granularity access.
//!
//! Rendering of cache contents, hit-rate graphs, and demo access-pattern
//! drivers are external consumers of this crate; they read state through the
//! non-mutating introspection surface on [`Level`] and [`Hierarchy`].

/// Set-associative cache level.
pub mod cache;
/// Hierarchy configuration (defaults, enums, per-level geometry).
pub mod config;
/// Configuration error types.
pub mod error;
/// Hierarchy orchestrator (chain assembly, byte/word access).
pub mod hierarchy;
/// The level contract and introspection types.
pub mod level;
/// The cache line value type.
pub mod line;
/// Replacement policy implementations (LRU, LFU, Random).
pub mod policies;
/// Terminal backing store level.
pub mod store;

/// Root configuration type; use `HierarchyConfig::default()` or deserialize from JSON.
pub use crate::config::HierarchyConfig;
/// Configuration error type returned by constructors and validation.
pub use crate::error::ConfigError;
/// Top-level hierarchy; construct with `Hierarchy::new`.
pub use crate::hierarchy::Hierarchy;
/// Uniform level contract implemented by caches and the terminal store.
pub use crate::level::Level;
/// Unit of data transfer between levels.
pub use crate::line::CacheLine;
