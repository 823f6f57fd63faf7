//! Test fixtures.

use bytes::Bytes;
use memview_core::{Segment, SegmentView};

/// The canonical three-segment layout: `"hello"`, `"world"`, `"!"`.
#[must_use]
pub fn canonical_segments() -> Vec<Segment> {
    vec![
        Segment::from_static(b"hello"),
        Segment::from_static(b"world"),
        Segment::from_static(b"!"),
    ]
}

/// A view over [`canonical_segments`].
#[must_use]
pub fn canonical_view() -> SegmentView {
    SegmentView::new(canonical_segments()).expect("Failed to build canonical view")
}

/// Splits one buffer into segments of `chunk` bytes sharing its storage.
///
/// The last segment holds the remainder. `chunk` of zero yields no segments.
#[must_use]
pub fn chunked_segments(data: &Bytes, chunk: usize) -> Vec<Segment> {
    if chunk == 0 {
        return Vec::new();
    }
    (0..data.len())
        .step_by(chunk)
        .map(|start| Segment::new(data.slice(start..(start + chunk).min(data.len()))))
        .collect()
}

/// Deterministic pattern data of the given size.
#[must_use]
pub fn pattern_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 251) as u8).collect()
}
