//! Error types for grid construction.

use strata_core::{CellId, FaceId, GlobalCellId};
use std::fmt;

/// Errors arising from grid construction.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// Every cell of the grid is inactive.
    NoActiveCells,
    /// An input array has the wrong length.
    DimensionMismatch {
        /// Which input.
        name: &'static str,
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },
    /// A cell spacing is zero, negative, or not finite.
    InvalidSpacing {
        /// Which spacing vector (`DXV`, `DYV`, `DZV`).
        name: &'static str,
        /// Position within the vector.
        index: usize,
        /// The value found.
        value: f64,
    },
    /// A face references a cell index outside the grid.
    CellOutOfRange {
        /// Offending face.
        face: FaceId,
        /// The referenced cell.
        cell: CellId,
        /// Number of cells in the grid.
        cell_count: usize,
    },
    /// A face has no adjacent cell at all.
    OrphanFace {
        /// Offending face.
        face: FaceId,
    },
    /// A face lists the same cell on both sides.
    SelfAdjacentFace {
        /// Offending face.
        face: FaceId,
    },
    /// A face normal is not unit length.
    NonUnitNormal {
        /// Offending face.
        face: FaceId,
        /// Length of the supplied normal.
        length: f64,
    },
    /// An interior face normal does not point from the inside cell towards
    /// the outside cell.
    MisorientedFace {
        /// Offending face.
        face: FaceId,
        /// `normal · (outside_centroid - inside_centroid)`, which must be positive.
        projection: f64,
    },
    /// A compressed cell maps to a global index beyond the global cell count.
    GlobalIndexOutOfRange {
        /// Offending compressed cell.
        cell: CellId,
        /// The global index it maps to.
        global: GlobalCellId,
        /// Number of global cells.
        global_cell_count: usize,
    },
    /// Two compressed cells map to the same global index.
    DuplicateGlobalIndex {
        /// The shared global index.
        global: GlobalCellId,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::NoActiveCells => write!(f, "grid has no active cells"),
            Self::DimensionMismatch {
                name,
                expected,
                actual,
            } => write!(f, "{name} has {actual} entries, expected {expected}"),
            Self::InvalidSpacing { name, index, value } => {
                write!(f, "{name}[{index}] = {value} must be positive and finite")
            }
            Self::CellOutOfRange {
                face,
                cell,
                cell_count,
            } => write!(f, "face {face} references cell {cell}, grid has {cell_count} cells"),
            Self::OrphanFace { face } => write!(f, "face {face} has no adjacent cell"),
            Self::SelfAdjacentFace { face } => {
                write!(f, "face {face} has the same cell on both sides")
            }
            Self::NonUnitNormal { face, length } => {
                write!(f, "face {face} normal has length {length}, expected 1")
            }
            Self::MisorientedFace { face, projection } => write!(
                f,
                "face {face} normal points away from its outside cell (projection {projection})"
            ),
            Self::GlobalIndexOutOfRange {
                cell,
                global,
                global_cell_count,
            } => write!(
                f,
                "cell {cell} maps to global index {global}, grid has {global_cell_count} global cells"
            ),
            Self::DuplicateGlobalIndex { global } => {
                write!(f, "global index {global} is mapped by more than one cell")
            }
        }
    }
}

impl std::error::Error for GridError {}
