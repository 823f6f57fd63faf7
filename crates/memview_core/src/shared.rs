//! A view shared across threads.

use crate::error::ViewResult;
use crate::stats::StatsSnapshot;
use crate::view::SegmentView;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// A cloneable handle to a [`SegmentView`] guarded by a single lock.
///
/// [`SegmentView`] itself does no locking. This wrapper serializes access
/// for callers that hand one view to several threads: reads share the lock,
/// discards take it exclusively, so a read never observes a half-applied
/// discard.
///
/// # Example
///
/// ```rust
/// use memview_core::{SegmentView, SharedView};
///
/// let shared = SharedView::new(SegmentView::new(["hello", "world"]).unwrap());
/// let consumer = shared.clone();
///
/// std::thread::spawn(move || consumer.discard_front(5)).join().unwrap();
/// assert_eq!(shared.read_at(0, 5).unwrap(), b"world");
/// ```
#[derive(Debug, Clone)]
pub struct SharedView {
    inner: Arc<RwLock<SegmentView>>,
}

impl SharedView {
    /// Wraps `view` for shared access.
    #[must_use]
    pub fn new(view: SegmentView) -> Self {
        Self {
            inner: Arc::new(RwLock::new(view)),
        }
    }

    /// Returns the logical size of the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if no bytes remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Copies `dst.len()` bytes at `offset` under the shared lock.
    ///
    /// # Errors
    ///
    /// See [`SegmentView::read`].
    pub fn read(&self, offset: usize, dst: &mut [u8]) -> ViewResult<()> {
        self.inner.read().read(offset, dst)
    }

    /// Reads `len` bytes at `offset` into a new buffer under the shared lock.
    ///
    /// # Errors
    ///
    /// See [`SegmentView::read_at`].
    pub fn read_at(&self, offset: usize, len: usize) -> ViewResult<Vec<u8>> {
        self.inner.read().read_at(offset, len)
    }

    /// Drops the first `count` bytes under the exclusive lock.
    pub fn discard_front(&self, count: usize) -> usize {
        self.inner.write().discard_front(count)
    }

    /// Returns a copy of the view's counters.
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.inner.read().stats().snapshot()
    }

    /// Acquires the shared lock for a sequence of consistent reads.
    pub fn lock(&self) -> RwLockReadGuard<'_, SegmentView> {
        self.inner.read()
    }

    /// Acquires the exclusive lock.
    pub fn lock_mut(&self) -> RwLockWriteGuard<'_, SegmentView> {
        self.inner.write()
    }
}

impl From<SegmentView> for SharedView {
    fn from(view: SegmentView) -> Self {
        Self::new(view)
    }
}
