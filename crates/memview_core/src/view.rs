//! The segment view.

use crate::config::ViewConfig;
use crate::error::{ViewError, ViewResult};
use crate::segment::Segment;
use crate::stats::ViewStats;
use std::collections::{vec_deque, VecDeque};
use tracing::{debug, trace};

/// A logical, contiguous address space over an ordered table of segments.
///
/// Reads translate a logical `(offset, len)` range into slices of one or more
/// segments and copy them out in order. Front discards pop fully consumed
/// segments and trim the new front segment in place, so their cost is
/// proportional to the number of retired segments rather than the number of
/// bytes dropped.
///
/// # Invariants
///
/// - `len()` always equals the sum of the remaining lengths of all segments
/// - Segments keep their construction order; only the front is ever removed
/// - Failed reads leave the view and the destination untouched
///
/// # Example
///
/// ```rust
/// use memview_core::SegmentView;
///
/// let mut view = SegmentView::new(["hello", "world", "!"]).unwrap();
/// assert_eq!(view.read_at(3, 4).unwrap(), b"lowo");
///
/// view.discard_front(2);
/// assert_eq!(view.len(), 9);
/// assert_eq!(view.read_at(2, 7).unwrap(), b"oworld!");
/// assert!(view.read_at(9, 1).is_err());
/// ```
#[derive(Debug, Default)]
pub struct SegmentView {
    segments: VecDeque<Segment>,
    total: usize,
    stats: ViewStats,
}

/// A logical offset translated into the segment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Index of the segment holding the byte, counted from the current front.
    pub segment: usize,
    /// Offset of the byte within that segment.
    pub offset: usize,
}

impl SegmentView {
    /// Creates a view over `segments` with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Allocation`] if the segment table cannot be
    /// allocated or the summed length overflows `usize`.
    pub fn new<I>(segments: I) -> ViewResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Segment>,
    {
        Self::with_config(&ViewConfig::default(), segments)
    }

    /// Creates a view over `segments` using `config`.
    ///
    /// Only the segment descriptors are copied; the bytes they refer to are
    /// shared with the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Allocation`] if the segment table cannot be
    /// allocated or the summed length overflows `usize`.
    pub fn with_config<I>(config: &ViewConfig, segments: I) -> ViewResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Segment>,
    {
        let segments = segments.into_iter();
        let (hint, _) = segments.size_hint();
        let requested = hint.saturating_add(config.initial_capacity);

        let mut table = VecDeque::new();
        table
            .try_reserve_exact(requested)
            .map_err(|_| ViewError::allocation(requested))?;

        let mut total = 0usize;
        for segment in segments {
            let segment: Segment = segment.into();
            if config.drop_empty_segments && segment.is_empty() {
                continue;
            }

            let slots = table.len() + 1;
            total = total
                .checked_add(segment.len())
                .ok_or_else(|| ViewError::allocation(slots))?;
            table
                .try_reserve(1)
                .map_err(|_| ViewError::allocation(slots))?;
            table.push_back(segment);
        }

        debug!(segments = table.len(), total, "segment view constructed");

        let view = Self {
            segments: table,
            total,
            stats: ViewStats::new(),
        };
        view.debug_check();
        Ok(view)
    }

    /// Returns the logical size of the view in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.total
    }

    /// Returns `true` if no bytes remain in the view.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns the number of segments still in the table.
    ///
    /// Zero-length segments that have not been retired are counted.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Iterates over the active segments, front first.
    pub fn segments(&self) -> vec_deque::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Returns the operation counters for this view.
    #[must_use]
    pub fn stats(&self) -> &ViewStats {
        &self.stats
    }

    /// Translates a logical offset into a segment index and intra-segment offset.
    ///
    /// Returns `None` if `offset >= self.len()`. Zero-length segments are never
    /// returned.
    #[must_use]
    pub fn locate(&self, offset: usize) -> Option<Position> {
        if offset >= self.total {
            return None;
        }

        let mut remaining = offset;
        for (index, segment) in self.segments.iter().enumerate() {
            if remaining < segment.len() {
                return Some(Position {
                    segment: index,
                    offset: remaining,
                });
            }
            remaining -= segment.len();
        }

        None
    }

    /// Copies `dst.len()` bytes starting at logical `offset` into `dst`.
    ///
    /// A read is all-or-nothing: on error `dst` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::OutOfRange`] if `offset + dst.len()` exceeds
    /// `self.len()`. A zero-length read at exactly `self.len()` succeeds.
    pub fn read(&self, offset: usize, dst: &mut [u8]) -> ViewResult<()> {
        self.check_range(offset, dst.len())?;

        let mut written = 0;
        for piece in self.pieces(offset, dst.len()) {
            let end = written + piece.len();
            dst[written..end].copy_from_slice(piece);
            written = end;
        }
        debug_assert_eq!(written, dst.len());

        self.stats.record_read(written);
        Ok(())
    }

    /// Reads `len` bytes starting at `offset` into a new buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::OutOfRange`] under the same conditions as
    /// [`SegmentView::read`]. Nothing is allocated for a rejected read.
    pub fn read_at(&self, offset: usize, len: usize) -> ViewResult<Vec<u8>> {
        self.check_range(offset, len)?;
        let mut buf = vec![0u8; len];
        self.read(offset, &mut buf)?;
        Ok(buf)
    }

    /// Returns the segment slices that make up `len` bytes at `offset`.
    ///
    /// Nothing is copied; each item borrows directly from segment storage.
    /// Zero-length segments produce no items.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::OutOfRange`] under the same conditions as
    /// [`SegmentView::read`].
    pub fn slices(&self, offset: usize, len: usize) -> ViewResult<Slices<'_>> {
        self.check_range(offset, len)?;
        Ok(self.pieces(offset, len))
    }

    /// Drops the first `count` bytes of the view.
    ///
    /// Offsets past `count` shift down by `count`. Discarding more than
    /// `self.len()` empties the view. Returns the number of bytes actually
    /// discarded.
    pub fn discard_front(&mut self, count: usize) -> usize {
        if count >= self.total {
            let discarded = self.total;
            let retired = self.segments.len();
            self.segments.clear();
            self.total = 0;

            trace!(count, discarded, retired, "discarded entire view");
            self.stats.record_discard(discarded, retired);
            return discarded;
        }

        // `count < total`, so some segment is longer than what is left to drop.
        let mut leftover = count;
        let mut retired = 0;
        while let Some(front) = self.segments.front_mut() {
            if front.len() > leftover {
                front.trim_front(leftover);
                break;
            }
            leftover -= front.len();
            self.segments.pop_front();
            retired += 1;
        }
        self.total -= count;

        trace!(count, retired, remaining = self.total, "discarded view front");
        self.stats.record_discard(count, retired);
        self.debug_check();
        count
    }

    fn check_range(&self, offset: usize, len: usize) -> ViewResult<()> {
        match offset.checked_add(len) {
            Some(end) if end <= self.total => Ok(()),
            _ => {
                debug!(offset, len, size = self.total, "rejected out-of-range read");
                self.stats.record_rejected_read();
                Err(ViewError::out_of_range(offset, len, self.total))
            }
        }
    }

    /// Builds the slice iterator for a range already checked by `check_range`.
    fn pieces(&self, offset: usize, len: usize) -> Slices<'_> {
        match self.locate(offset) {
            Some(position) if len > 0 => Slices {
                segments: self.segments.range(position.segment..),
                skip: position.offset,
                remaining: len,
            },
            _ => Slices {
                segments: self.segments.range(0..0),
                skip: 0,
                remaining: 0,
            },
        }
    }

    fn debug_check(&self) {
        debug_assert_eq!(
            self.total,
            self.segments.iter().map(Segment::len).sum::<usize>(),
            "view total out of sync with segment table"
        );
    }
}

/// Iterator over the segment slices backing a logical range.
///
/// Created by [`SegmentView::slices`].
#[derive(Debug, Clone)]
pub struct Slices<'a> {
    segments: vec_deque::Iter<'a, Segment>,
    skip: usize,
    remaining: usize,
}

impl<'a> Iterator for Slices<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            let segment = self.segments.next()?;
            let available = &segment.as_slice()[self.skip..];
            self.skip = 0;
            if available.is_empty() {
                continue;
            }

            let take = available.len().min(self.remaining);
            self.remaining -= take;
            return Some(&available[..take]);
        }
        None
    }
}
