//! Benchmarks for memview.
//!
//! Shared helpers live in [`utils`]; the benchmarks themselves are under
//! `benches/`.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod utils;
