//! Reusable scratch buffers for the render hot path.
//!
//! Owned by a handler lineage's shared state rather than a process-wide
//! singleton, so the core stays testable without hidden mutable globals.

use std::sync::{Mutex, PoisonError};

/// Fresh buffers start with this capacity so a typical line renders without
/// reallocating.
pub const INITIAL_BUFFER_SIZE: usize = 1024;

/// Buffers that grew past this are dropped instead of pooled — bounds the
/// peak memory the pool can hold onto after a burst of oversized lines.
pub const MAX_BUFFER_SIZE: usize = 16 * 1024;

/// Thread-safe free list of growable byte buffers. Entries are fungible;
/// no ordering guarantees.
#[derive(Debug, Default)]
pub struct BufPool {
    free: Mutex<Vec<Vec<u8>>>,
}

impl BufPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an empty buffer with at least [`INITIAL_BUFFER_SIZE`] capacity.
    #[must_use]
    pub fn acquire(&self) -> Vec<u8> {
        self.free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .unwrap_or_else(|| Vec::with_capacity(INITIAL_BUFFER_SIZE))
    }

    /// Returns a buffer for reuse. Buffers over [`MAX_BUFFER_SIZE`] capacity
    /// are dropped rather than pooled.
    pub fn release(&self, mut buf: Vec<u8>) {
        if buf.capacity() > MAX_BUFFER_SIZE {
            return;
        }
        buf.clear();
        self.free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(buf);
    }
}
