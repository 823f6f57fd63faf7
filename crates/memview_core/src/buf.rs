//! [`bytes::Buf`] integration.
//!
//! Consuming a view through `Buf` discards from its front, so any `Buf`
//! consumer can drain a view without flattening it first.

use crate::segment::Segment;
use crate::view::SegmentView;
use bytes::Buf;
use std::io::IoSlice;

impl Buf for SegmentView {
    fn remaining(&self) -> usize {
        self.len()
    }

    fn chunk(&self) -> &[u8] {
        self.segments()
            .find(|segment| !segment.is_empty())
            .map_or(&[][..], Segment::as_slice)
    }

    fn chunks_vectored<'a>(&'a self, dst: &mut [IoSlice<'a>]) -> usize {
        let mut filled = 0;
        let segments = self.segments().filter(|segment| !segment.is_empty());
        for (slot, segment) in dst.iter_mut().zip(segments) {
            *slot = IoSlice::new(segment.as_slice());
            filled += 1;
        }
        filled
    }

    /// Advances past `cnt` bytes. Unlike most `Buf` implementations this
    /// clamps instead of panicking when `cnt` exceeds `remaining()`.
    fn advance(&mut self, cnt: usize) {
        self.discard_front(cnt);
    }
}
