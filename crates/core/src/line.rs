//! Cache line value type.
//!
//! A line is the unit of transfer between levels: a fixed-size block of
//! bytes identified by a tag, plus a dirty flag. Lines are exclusively
//! owned; every transfer between levels or out to a caller is a value copy,
//! so no level ever holds a reference into another level's storage.

/// A fixed-size block of bytes moving through the hierarchy.
///
/// Residency identity is the [`tag`](Self::tag) field only, never buffer
/// identity. The tag of a line at address `A` is always `A / line_width`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheLine {
    /// Block index: address divided by the line width.
    pub tag: u64,
    /// Set when the line has been modified since it was loaded; a dirty
    /// line must be written back to the next level before eviction.
    pub dirty: bool,
    /// Line contents, exactly one line width long.
    pub bytes: Vec<u8>,
}

impl CacheLine {
    /// Creates a zeroed line: tag 0, not dirty, `line_width` zero bytes.
    pub fn new(line_width: usize) -> Self {
        Self {
            tag: 0,
            dirty: false,
            bytes: vec![0; line_width],
        }
    }

    /// Width of this line's buffer in bytes.
    pub fn line_width(&self) -> usize {
        self.bytes.len()
    }
}
