//! Configuration error types.
//!
//! Geometry is validated once, when a hierarchy is assembled; violations are
//! reported as typed errors rather than discovered mid-simulation. Per-access
//! contract violations (misaligned addresses, tag mismatches, straddling
//! word accesses) are caller bugs and panic instead — coercing them would
//! corrupt the simulated address space and invalidate hit/miss measurements.

use thiserror::Error;

/// Errors raised while validating or parsing a hierarchy configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A cache level's size is not evenly divisible by `line × set size`.
    #[error(
        "cache size {size_bytes} is not divisible by \
         line width {line_bytes} x set size {set_size}"
    )]
    InvalidGeometry {
        /// Configured total size in bytes.
        size_bytes: usize,
        /// Configured line width in bytes.
        line_bytes: usize,
        /// Configured slots per set.
        set_size: usize,
    },

    /// A geometry field that must be nonzero is zero.
    #[error("cache geometry field {field} must be nonzero")]
    ZeroGeometry {
        /// Name of the zero field.
        field: &'static str,
    },

    /// Levels disagree on line width; inter-level transfers require one
    /// width across the whole chain.
    #[error("cache level {index}: line width {got} differs from first level's {expected}")]
    MismatchedLineWidth {
        /// Index of the offending level, outermost first.
        index: usize,
        /// The offending level's line width.
        got: usize,
        /// Line width of the first level.
        expected: usize,
    },

    /// Line width is not a multiple of the 4-byte word granularity.
    #[error("line width {line_bytes} is not a multiple of the {word} byte word size")]
    UnalignedLineWidth {
        /// Configured line width in bytes.
        line_bytes: usize,
        /// Word granularity in bytes.
        word: usize,
    },

    /// Store span is not a whole number of lines.
    #[error("store size {size_bytes} is not a multiple of line width {line_bytes}")]
    UnalignedStore {
        /// Configured store size in bytes.
        size_bytes: usize,
        /// Line width in bytes.
        line_bytes: usize,
    },

    /// A JSON configuration document failed to deserialize.
    #[error("invalid hierarchy configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
