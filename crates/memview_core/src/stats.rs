//! View statistics.
//!
//! Counters are relaxed atomics so that `&self` reads can record activity.
//!
//! # Usage
//!
//! ```rust
//! use memview_core::SegmentView;
//!
//! let view = SegmentView::new(["hello", "world"]).unwrap();
//! let mut buf = [0u8; 4];
//! view.read(3, &mut buf).unwrap();
//!
//! let stats = view.stats().snapshot();
//! assert_eq!(stats.reads, 1);
//! assert_eq!(stats.bytes_read, 4);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Operation counters for a single view.
#[derive(Debug, Default)]
pub struct ViewStats {
    /// Successful reads.
    reads: AtomicU64,
    /// Bytes copied by successful reads.
    bytes_read: AtomicU64,
    /// Reads rejected as out of range.
    rejected_reads: AtomicU64,
    /// Calls to `discard_front`.
    discards: AtomicU64,
    /// Bytes actually removed by discards.
    bytes_discarded: AtomicU64,
    /// Segments popped from the front of the table.
    segments_retired: AtomicU64,
}

impl ViewStats {
    /// Creates a new stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_read(&self, bytes: usize) {
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.bytes_read.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    pub(crate) fn record_rejected_read(&self) {
        self.rejected_reads.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_discard(&self, bytes: usize, retired: usize) {
        self.discards.fetch_add(1, Ordering::Relaxed);
        self.bytes_discarded
            .fetch_add(bytes as u64, Ordering::Relaxed);
        self.segments_retired
            .fetch_add(retired as u64, Ordering::Relaxed);
    }

    /// Returns a point-in-time copy of all counters.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            reads: self.reads.load(Ordering::Relaxed),
            bytes_read: self.bytes_read.load(Ordering::Relaxed),
            rejected_reads: self.rejected_reads.load(Ordering::Relaxed),
            discards: self.discards.load(Ordering::Relaxed),
            bytes_discarded: self.bytes_discarded.load(Ordering::Relaxed),
            segments_retired: self.segments_retired.load(Ordering::Relaxed),
        }
    }

    /// Resets all counters to zero.
    pub fn reset(&self) {
        self.reads.store(0, Ordering::Relaxed);
        self.bytes_read.store(0, Ordering::Relaxed);
        self.rejected_reads.store(0, Ordering::Relaxed);
        self.discards.store(0, Ordering::Relaxed);
        self.bytes_discarded.store(0, Ordering::Relaxed);
        self.segments_retired.store(0, Ordering::Relaxed);
    }
}

/// A copy of [`ViewStats`] counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Successful reads.
    pub reads: u64,
    /// Bytes copied by successful reads.
    pub bytes_read: u64,
    /// Reads rejected as out of range.
    pub rejected_reads: u64,
    /// Calls to `discard_front`.
    pub discards: u64,
    /// Bytes actually removed by discards.
    pub bytes_discarded: u64,
    /// Segments popped from the front of the table.
    pub segments_retired: u64,
}
