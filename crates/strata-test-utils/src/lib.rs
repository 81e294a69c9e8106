//! Test utilities for Strata development.
//!
//! Reference decks with hand-checkable geometry, counting multiplier
//! fields that make every face's multiplier identify its cells, and seeded
//! random rock for property tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::*;

/// Relative comparison used throughout the geology tests.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-10 * a.abs().max(b.abs()).max(1.0)
}
