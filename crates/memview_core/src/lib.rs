//! # memview
//!
//! A contiguous logical view over discrete, possibly non-adjacent byte
//! segments.
//!
//! A [`SegmentView`] presents an ordered list of [`Segment`]s as a single
//! address space without copying their contents. Consumers read arbitrary
//! ranges as if the segments were concatenated, and drop bytes from the
//! front in time proportional to the number of segments retired rather
//! than the number of bytes.
//!
//! ## Design Principles
//!
//! - Segments are shared handles; the view never copies or mutates storage
//! - Reads are pure queries and are all-or-nothing
//! - Front discards never fail; oversized discards empty the view
//! - One unsigned size type (`usize`) for every offset and length
//! - No internal locking; use [`SharedView`] to share across threads
//!
//! ## Example
//!
//! ```rust
//! use memview_core::SegmentView;
//!
//! let mut view = SegmentView::new(["hello", "world", "!"]).unwrap();
//!
//! let mut buf = [0u8; 4];
//! view.read(3, &mut buf).unwrap();
//! assert_eq!(&buf, b"lowo");
//!
//! view.discard_front(6);
//! assert_eq!(view.read_at(0, 3).unwrap(), b"orl");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod buf;
mod config;
mod error;
mod segment;
mod shared;
mod stats;
mod view;

pub use config::ViewConfig;
pub use error::{ViewError, ViewResult};
pub use segment::Segment;
pub use shared::SharedView;
pub use stats::{StatsSnapshot, ViewStats};
pub use view::{Position, SegmentView, Slices};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
