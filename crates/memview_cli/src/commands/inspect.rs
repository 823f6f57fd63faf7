//! Inspect command implementation.

use memview_core::{SegmentView, StatsSnapshot};
use serde::Serialize;

/// View inspection result.
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Logical size in bytes.
    pub total_len: usize,
    /// Number of segments in the table.
    pub segment_count: usize,
    /// Number of zero-length segments in the table.
    pub empty_segments: usize,
    /// Per-segment details.
    pub segments: Vec<SegmentInfo>,
    /// Bytes discarded so far.
    pub bytes_discarded: u64,
    /// Segments retired so far.
    pub segments_retired: u64,
}

/// Details for a single segment.
#[derive(Debug, Serialize)]
pub struct SegmentInfo {
    /// Position in the table, front first.
    pub index: usize,
    /// Logical offset of the segment's first byte.
    pub view_offset: usize,
    /// Remaining length.
    pub len: usize,
}

/// Collects the segment table of `view`.
pub fn execute(view: &SegmentView) -> InspectResult {
    let mut view_offset = 0;
    let segments: Vec<SegmentInfo> = view
        .segments()
        .enumerate()
        .map(|(index, segment)| {
            let info = SegmentInfo {
                index,
                view_offset,
                len: segment.len(),
            };
            view_offset += segment.len();
            info
        })
        .collect();

    let StatsSnapshot {
        bytes_discarded,
        segments_retired,
        ..
    } = view.stats().snapshot();

    InspectResult {
        total_len: view.len(),
        segment_count: view.segment_count(),
        empty_segments: segments.iter().filter(|s| s.len == 0).count(),
        segments,
        bytes_discarded,
        segments_retired,
    }
}

/// Runs the inspect command.
pub fn run(view: &SegmentView, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let result = execute(view);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("View: {} bytes in {} segments", result.total_len, result.segment_count);
    if result.empty_segments > 0 {
        println!("  ({} zero-length)", result.empty_segments);
    }
    println!(
        "Discarded: {} bytes, {} segments retired",
        result.bytes_discarded, result.segments_retired
    );
    println!();
    for info in &result.segments {
        println!(
            "  #{:<4} offset {:>10}  len {:>10}",
            info.index, info.view_offset, info.len
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_after_discard() {
        let mut view = SegmentView::new(["hello", "", "world", "!"]).unwrap();
        view.discard_front(7);

        let result = execute(&view);
        assert_eq!(result.total_len, 4);
        assert_eq!(result.segment_count, 2);
        assert_eq!(result.empty_segments, 0);
        assert_eq!(result.segments[0].len, 3);
        assert_eq!(result.segments[1].view_offset, 3);
        assert_eq!(result.bytes_discarded, 7);
        assert_eq!(result.segments_retired, 2);
    }

    #[test]
    fn inspect_counts_empty_segments() {
        let view = SegmentView::new(["", "ab", ""]).unwrap();
        let result = execute(&view);
        assert_eq!(result.segment_count, 3);
        assert_eq!(result.empty_segments, 2);
        assert_eq!(result.segments[2].view_offset, 2);
    }
}
