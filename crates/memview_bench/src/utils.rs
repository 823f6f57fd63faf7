//! Benchmark utilities.

use bytes::Bytes;
use memview_core::{Segment, SegmentView};
use rand::Rng;

/// Generate random data of the specified size.
pub fn random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

/// Generate `count` independently allocated segments of `segment_size` bytes.
pub fn generate_segments(count: usize, segment_size: usize) -> Vec<Segment> {
    (0..count)
        .map(|_| Segment::from(random_data(segment_size)))
        .collect()
}

/// Build a view over freshly generated segments.
pub fn build_view(count: usize, segment_size: usize) -> SegmentView {
    SegmentView::new(generate_segments(count, segment_size)).expect("Failed to build view")
}

/// Concatenate segments into one contiguous buffer.
pub fn flatten(segments: &[Segment]) -> Bytes {
    let mut data = Vec::with_capacity(segments.iter().map(Segment::len).sum());
    for segment in segments {
        data.extend_from_slice(segment.as_slice());
    }
    Bytes::from(data)
}
