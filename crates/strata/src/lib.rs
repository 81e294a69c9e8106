//! Strata: derived reservoir geology for finite-volume flow simulation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Strata sub-crates. For most users, adding `strata` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! // 2 x 2 x 2 deck, unit permeability, porosity 0.3.
//! let grid = CartesianGrid::builder()
//!     .dims(2, 2, 2)
//!     .dxv(vec![1.0, 2.0])
//!     .dyv(vec![3.0, 4.0])
//!     .dzv(vec![5.0, 6.0])
//!     .uniform_tops(100.0)
//!     .build()
//!     .unwrap();
//! let rock = RockProperties::from_fields(
//!     &grid,
//!     &RockFields::new().permx(vec![1.0; 8]).poro(vec![0.3; 8]),
//! )
//! .unwrap();
//!
//! // Halve flow across every X face leaving global cell 0 in +X.
//! let multx: MultiplierKeyword = "MULTX".parse().unwrap();
//! let table = MultiplierTable::new(8)
//!     .with_sparse_field(multx, [(GlobalCellId(0), 0.5)])
//!     .unwrap();
//!
//! let geo = DerivedGeology::new(&grid, &rock, Some(&table)).unwrap();
//! assert_eq!(geo.cell_count(), 8);
//! assert_eq!(geo.face_count(), 36);
//! assert!((geo.total_pore_volume() - 69.3).abs() < 1e-9);
//! // Face 1 joins global cells 0 and 1: 15 / 1.5 = 10, halved.
//! assert!((geo.transmissibility()[1] - 5.0).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | IDs, axes, error taxonomy |
//! | [`grid`] | `strata-grid` | `GridView` and the Cartesian/unstructured backends |
//! | [`geology`] | `strata-geology` | Rock properties, multipliers, the derivation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`strata-core`).
///
/// Cell, face and global identifiers, [`types::Axis`] and
/// [`types::Sign`], and the [`types::GeologyError`] taxonomy.
pub use strata_core as types;

/// Grid topology and geometry (`strata-grid`).
///
/// The [`grid::GridView`] trait with [`grid::CartesianGrid`] and
/// [`grid::UnstructuredGrid`] backends.
pub use strata_grid as grid;

/// Pore volume and transmissibility derivation (`strata-geology`).
///
/// [`geology::DerivedGeology`] runs the pass; the per-face pieces are
/// [`geology::half_transmissibility`] and
/// [`geology::TransmissibilityAssembler`].
pub use strata_geology as geology;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Identifiers and axes
    pub use strata_core::{Axis, CellId, FaceId, GlobalCellId, Sign};

    // Errors
    pub use strata_core::{ConfigError, GeologyError, ValidationError};

    // Grids
    pub use strata_grid::{CartesianGrid, GridError, GridView, UnstructuredGrid};

    // Geology
    pub use strata_geology::{
        DerivedGeology, GeologyConfig, MultiplierKeyword, MultiplierTable, ParallelStrategy,
        RockFields, RockProperties, RockPropertyView,
    };
}
