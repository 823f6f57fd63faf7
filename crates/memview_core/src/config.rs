//! View configuration.

/// Configuration for building a [`crate::SegmentView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    /// Whether to drop zero-length segments at construction.
    ///
    /// Zero-length segments contribute nothing to the address space and are
    /// skipped by reads either way.
    pub drop_empty_segments: bool,

    /// Extra segment table slots to reserve beyond the supplied segments.
    pub initial_capacity: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            drop_empty_segments: false,
            initial_capacity: 0,
        }
    }
}

impl ViewConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether zero-length segments are dropped at construction.
    #[must_use]
    pub const fn drop_empty_segments(mut self, value: bool) -> Self {
        self.drop_empty_segments = value;
        self
    }

    /// Sets the number of extra segment table slots to reserve.
    #[must_use]
    pub const fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
