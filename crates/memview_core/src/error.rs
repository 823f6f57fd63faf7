//! Error types for view operations.

use thiserror::Error;

/// Result type for view operations.
pub type ViewResult<T> = Result<T, ViewError>;

/// Errors that can occur while building or reading a view.
///
/// Front discards have a total domain and never produce an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// The segment table could not be allocated.
    ///
    /// Also reported when the summed segment lengths cannot be represented
    /// as a single address space.
    #[error("failed to allocate segment table for {requested} segments")]
    Allocation {
        /// Number of segment slots that were requested.
        requested: usize,
    },

    /// A read referenced bytes outside `[0, size]`.
    #[error("read out of range: offset {offset}, len {len}, size {size}")]
    OutOfRange {
        /// The requested logical offset.
        offset: usize,
        /// The requested read length.
        len: usize,
        /// The logical size of the view at the time of the read.
        size: usize,
    },
}

impl ViewError {
    /// Creates an allocation error.
    pub fn allocation(requested: usize) -> Self {
        Self::Allocation { requested }
    }

    /// Creates an out-of-range error.
    pub fn out_of_range(offset: usize, len: usize, size: usize) -> Self {
        Self::OutOfRange { offset, len, size }
    }

    /// Returns `true` if the caller can recover by adjusting the request.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
