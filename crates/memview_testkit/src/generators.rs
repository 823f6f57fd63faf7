//! Property-based test generators using proptest.
//!
//! Layout strategies deliberately include zero-length segments, since they
//! are the easiest way to break offset arithmetic.

use proptest::prelude::*;

/// Strategy for a single segment's bytes, empty segments included.
pub fn segment_data_strategy(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        1 => Just(Vec::new()),
        4 => prop::collection::vec(any::<u8>(), 1..=max_len.max(1)),
    ]
}

/// Strategy for an ordered segment layout.
pub fn layout_strategy(
    max_segments: usize,
    max_segment_len: usize,
) -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(segment_data_strategy(max_segment_len), 0..=max_segments)
}

/// An operation against a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOperation {
    /// Read `len` bytes at `offset`.
    Read {
        /// Logical offset.
        offset: usize,
        /// Number of bytes.
        len: usize,
    },
    /// Discard `count` bytes from the front.
    Discard {
        /// Number of bytes.
        count: usize,
    },
}

/// Strategy for one operation with offsets and counts up to `span`.
///
/// `span` should exceed the layout size so that rejected reads and clamped
/// discards are generated too.
pub fn view_operation_strategy(span: usize) -> impl Strategy<Value = ViewOperation> {
    prop_oneof![
        3 => (0..=span, 0..=span).prop_map(|(offset, len)| ViewOperation::Read { offset, len }),
        1 => (0..=span).prop_map(|count| ViewOperation::Discard { count }),
    ]
}

/// Strategy for a sequence of operations.
pub fn operation_sequence_strategy(
    span: usize,
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<ViewOperation>> {
    prop::collection::vec(view_operation_strategy(span), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Overrides the number of cases, for properties whose inputs are
    /// expensive to run (long operation sequences).
    #[must_use]
    pub const fn with_cases(mut self, cases: u32) -> Self {
        self.cases = cases;
        self
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
