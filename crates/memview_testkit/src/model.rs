//! Flat reference model.
//!
//! The model keeps the concatenated bytes in one buffer and answers the same
//! queries as a [`SegmentView`], so any divergence points at a bookkeeping
//! bug in the view.

use crate::generators::ViewOperation;
use memview_core::{Segment, SegmentView, ViewResult};

/// The concatenated content of a layout with a front cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatModel {
    data: Vec<u8>,
    front: usize,
}

impl FlatModel {
    /// Builds a model from the segments' concatenation.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut data = Vec::new();
        for segment in segments {
            data.extend_from_slice(segment.as_ref());
        }
        Self { data, front: 0 }
    }

    /// Returns the number of bytes not yet discarded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len() - self.front
    }

    /// Returns `true` if every byte has been discarded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the live bytes.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.data[self.front..]
    }

    /// Returns `len` bytes at `offset`, or `None` if out of range.
    #[must_use]
    pub fn read(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let end = offset.checked_add(len)?;
        self.content().get(offset..end)
    }

    /// Drops up to `count` bytes from the front, returning how many were dropped.
    pub fn discard_front(&mut self, count: usize) -> usize {
        let dropped = count.min(self.len());
        self.front += dropped;
        dropped
    }
}

/// Result of applying a [`ViewOperation`] to both sides of a [`ModelPair`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Bytes returned by a read, or `None` if the read was rejected.
    Read(Option<Vec<u8>>),
    /// Bytes removed by a discard.
    Discarded(usize),
}

/// A view and its reference model driven in lockstep.
#[derive(Debug)]
pub struct ModelPair {
    /// The view under test.
    pub view: SegmentView,
    /// The reference model.
    pub model: FlatModel,
}

impl ModelPair {
    /// Builds a view and a model over the same layout.
    ///
    /// # Errors
    ///
    /// Returns the view's construction error.
    pub fn new<I, S>(segments: I) -> ViewResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment>,
    {
        let segments: Vec<Segment> = segments.into_iter().map(Into::into).collect();
        let model = FlatModel::new(&segments);
        let view = SegmentView::new(segments)?;
        Ok(Self { view, model })
    }

    /// Applies `op` to both sides and panics if they disagree.
    pub fn apply(&mut self, op: &ViewOperation) -> Outcome {
        match *op {
            ViewOperation::Read { offset, len } => {
                let expected = self.model.read(offset, len).map(<[u8]>::to_vec);
                let actual = self.view.read_at(offset, len).ok();
                assert_eq!(actual, expected, "read({offset}, {len}) diverged");
                Outcome::Read(actual)
            }
            ViewOperation::Discard { count } => {
                let expected = self.model.discard_front(count);
                let actual = self.view.discard_front(count);
                assert_eq!(actual, expected, "discard_front({count}) diverged");
                Outcome::Discarded(actual)
            }
        }
    }

    /// Panics unless the view and the model hold the same bytes.
    pub fn assert_consistent(&self) {
        assert_eq!(self.view.len(), self.model.len(), "length diverged");
        let summed: usize = self.view.segments().map(Segment::len).sum();
        assert_eq!(summed, self.view.len(), "segment table out of sync");
        let content = self
            .view
            .read_at(0, self.view.len())
            .expect("full-range read must succeed");
        assert_eq!(content, self.model.content(), "content diverged");
    }
}
