//! Grid topology and geometry for Strata.
//!
//! This crate defines the [`GridView`] trait, the single capability set
//! through which the geology computation sees a mesh, along with two
//! concrete backends and the explicit compressed ↔ global index table.
//!
//! # Backends
//!
//! - [`CartesianGrid`]: array-backed structured grid built from per-axis
//!   spacing vectors, with optional ACTNUM deactivation
//! - [`UnstructuredGrid`]: topology-backed mesh built from explicit cell and
//!   face lists (faulted or re-indexed meshes)
//!
//! Both backends number active cells compactly and keep a
//! [`GlobalCellMap`] back to the logically Cartesian numbering in which
//! property and multiplier fields are authored.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cartesian;
pub mod error;
pub mod global_map;
pub mod unstructured;
pub mod view;

#[cfg(test)]
pub(crate) mod compliance;

pub use cartesian::{CartesianGrid, CartesianGridBuilder};
pub use error::GridError;
pub use global_map::GlobalCellMap;
pub use unstructured::{FaceGeometry, UnstructuredGrid};
pub use view::{FaceCells, FaceSide, GridView};
