//! Core types for the Strata reservoir-geology workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the grid and geology crates: cell and face
//! identifiers, the compressed/global index split, principal axes, and the
//! error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod id;

pub use axis::{Axis, Sign, Vec3};
pub use error::{ConfigError, GeologyError, ValidationError};
pub use id::{CellId, FaceId, GlobalCellId};
