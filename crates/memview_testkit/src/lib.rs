//! # memview Testkit
//!
//! Test utilities for memview.
//!
//! This crate provides:
//! - Fixtures for the canonical `hello`/`world`/`!` layout
//! - A flat reference model to check views against
//! - Property-based test generators using proptest
//! - A fuzz harness that drives a view from arbitrary bytes
//!
//! ## Usage
//!
//! ```rust
//! use memview_testkit::prelude::*;
//!
//! let mut pair = ModelPair::new(canonical_segments()).unwrap();
//! pair.apply(&ViewOperation::Discard { count: 2 });
//! pair.assert_consistent();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod fuzz;
pub mod generators;
pub mod model;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::fuzz::*;
    pub use crate::generators::*;
    pub use crate::model::*;
}

pub use fixtures::*;
pub use fuzz::*;
pub use generators::*;
pub use model::*;
