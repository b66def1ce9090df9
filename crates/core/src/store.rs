//! Terminal backing store.
//!
//! The innermost level of the hierarchy: a flat, zero-filled byte buffer
//! spanning the full simulated address range. It has no set structure and
//! no eviction, and every access it serves counts as a hit by construction
//! since there is no lower level to miss against.

use crate::level::{Counters, Geometry, Level};
use crate::line::CacheLine;

/// Flat terminal store; always hits.
pub struct Store {
    line_width: usize,
    bytes: Vec<u8>,
    counters: Counters,
}

impl Store {
    /// Creates a zero-filled store of `size_bytes` bytes serving lines of
    /// `line_width` bytes.
    ///
    /// `size_bytes` must be a multiple of `line_width`; the hierarchy
    /// validates this before construction.
    pub fn new(size_bytes: usize, line_width: usize) -> Self {
        Self {
            line_width,
            bytes: vec![0; size_bytes],
            counters: Counters::default(),
        }
    }
}

impl Level for Store {
    fn read_line(&mut self, address: u64) -> CacheLine {
        let lw = self.line_width as u64;
        assert!(
            address % lw == 0,
            "store read at {address:#x} not aligned to line width {lw}"
        );
        let offset = address as usize;
        assert!(
            offset + self.line_width <= self.bytes.len(),
            "store read at {address:#x} out of bounds"
        );

        let mut line = CacheLine::new(self.line_width);
        line.bytes.copy_from_slice(&self.bytes[offset..offset + self.line_width]);
        line.tag = address / lw;

        // Reads from the store always hit.
        self.counters.r_hit += 1;
        line
    }

    fn write_line(&mut self, address: u64, line: &CacheLine) {
        let lw = self.line_width as u64;
        assert!(
            address % lw == 0,
            "store write at {address:#x} not aligned to line width {lw}"
        );
        assert!(
            line.tag == address / lw,
            "store write at {address:#x} carries tag {:#x}, expected {:#x}",
            line.tag,
            address / lw
        );
        let offset = address as usize;
        assert!(
            offset + self.line_width <= self.bytes.len(),
            "store write at {address:#x} out of bounds"
        );

        self.bytes[offset..offset + self.line_width].copy_from_slice(&line.bytes);

        // Writes to the store always hit.
        self.counters.w_hit += 1;
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
            num_sets: 0,
            set_size: 0,
            size_bytes: self.bytes.len(),
        }
    }

    fn next_level(&self) -> Option<&dyn Level> {
        None
    }

    fn next_level_mut(&mut self) -> Option<&mut dyn Level> {
        None
    }

    fn peek_line(&self, _set: usize, _way: usize) -> Option<&CacheLine> {
        None
    }

    fn peek_store(&self) -> Option<&[u8]> {
        Some(&self.bytes)
    }
}
