//! Segment descriptors.

use bytes::{Buf, Bytes};
use std::fmt;

/// A contiguous run of bytes contributing a sub-range of a view.
///
/// A segment is a shared handle to storage owned elsewhere plus its length.
/// Cloning a segment or trimming its front never copies the bytes it refers to.
///
/// # Example
///
/// ```rust
/// use memview_core::Segment;
///
/// let segment = Segment::from_static(b"hello");
/// assert_eq!(segment.len(), 5);
/// assert_eq!(segment.as_slice(), b"hello");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Segment {
    data: Bytes,
}

impl Segment {
    /// Creates a segment over shared bytes.
    #[must_use]
    pub fn new(data: Bytes) -> Self {
        Self { data }
    }

    /// Creates a segment over a static byte slice.
    #[must_use]
    pub const fn from_static(data: &'static [u8]) -> Self {
        Self {
            data: Bytes::from_static(data),
        }
    }

    /// Creates an empty segment.
    #[must_use]
    pub const fn empty() -> Self {
        Self::from_static(&[])
    }

    /// Returns the number of bytes remaining in this segment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the segment has no remaining bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the remaining bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the shared handle to the remaining bytes.
    #[must_use]
    pub fn bytes(&self) -> &Bytes {
        &self.data
    }

    /// Consumes the segment, returning its shared handle.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    /// Drops `count` bytes from the front of the segment.
    ///
    /// Callers must ensure `count <= self.len()`.
    pub(crate) fn trim_front(&mut self, count: usize) {
        debug_assert!(count <= self.len());
        self.data.advance(count);
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segment")
            .field("ptr", &self.data.as_ptr())
            .field("len", &self.data.len())
            .finish()
    }
}

impl From<Bytes> for Segment {
    fn from(data: Bytes) -> Self {
        Self::new(data)
    }
}

impl From<Vec<u8>> for Segment {
    fn from(data: Vec<u8>) -> Self {
        Self::new(Bytes::from(data))
    }
}

impl From<&'static [u8]> for Segment {
    fn from(data: &'static [u8]) -> Self {
        Self::from_static(data)
    }
}

impl From<&'static str> for Segment {
    fn from(data: &'static str) -> Self {
        Self::from_static(data.as_bytes())
    }
}

impl From<String> for Segment {
    fn from(data: String) -> Self {
        Self::new(Bytes::from(data))
    }
}

impl AsRef<[u8]> for Segment {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
