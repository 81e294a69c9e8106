//! Error types for geology derivation.
//!
//! Two fatal classes are distinguished: [`ConfigError`] for inputs that are
//! structurally wrong (field sizes, missing fields, unknown keywords) and
//! [`ValidationError`] for inputs that are well-formed but physically
//! inadmissible (non-positive permeability, degenerate geometry). A zero
//! transmissibility produced by a zero half-transmissibility is *not* an
//! error and never appears here.

use crate::axis::Axis;
use crate::id::{CellId, FaceId, GlobalCellId};
use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Structural problems with the inputs, detected at construction.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A multiplier field does not have one entry per global cell.
    MultiplierLengthMismatch {
        /// Keyword of the offending field (e.g. `MULTX-`).
        keyword: &'static str,
        /// The grid's global cell count.
        expected: usize,
        /// Number of entries supplied.
        actual: usize,
    },
    /// A sparse multiplier entry names a global cell outside the grid.
    MultiplierCellOutOfRange {
        /// Keyword of the offending field.
        keyword: &'static str,
        /// The out-of-range global cell.
        global: GlobalCellId,
        /// The table's global cell count.
        global_cell_count: usize,
    },
    /// The multiplier table was sized for a different grid.
    MultiplierGridMismatch {
        /// Global cell count the table was built for.
        table: usize,
        /// Global cell count of the grid.
        grid: usize,
    },
    /// A multiplier field name is not one of the six known keywords.
    UnknownMultiplier {
        /// The unrecognised name.
        name: String,
    },
    /// Two supplied fields resolve to the same keyword.
    DuplicateMultiplier {
        /// The keyword supplied twice.
        keyword: &'static str,
    },
    /// A rock-property field with no default was not supplied.
    MissingRockField {
        /// Field name (e.g. `PERMX`).
        name: &'static str,
    },
    /// A rock-property field has the wrong number of entries.
    FieldLengthMismatch {
        /// Field name.
        name: &'static str,
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },
    /// Rock properties were built for a different number of cells than the grid has.
    CellCountMismatch {
        /// Active cells in the grid.
        grid: usize,
        /// Cells described by the rock properties.
        rock: usize,
    },
    /// Parallel execution settings are unusable.
    InvalidParallelConfig {
        /// What is wrong.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultiplierLengthMismatch {
                keyword,
                expected,
                actual,
            } => write!(
                f,
                "multiplier field {keyword} has {actual} entries, expected {expected} (one per global cell)"
            ),
            Self::MultiplierCellOutOfRange {
                keyword,
                global,
                global_cell_count,
            } => write!(
                f,
                "multiplier field {keyword} names global cell {global}, grid has {global_cell_count}"
            ),
            Self::MultiplierGridMismatch { table, grid } => write!(
                f,
                "multiplier table covers {table} global cells, grid has {grid}"
            ),
            Self::UnknownMultiplier { name } => {
                write!(f, "unknown transmissibility multiplier '{name}'")
            }
            Self::DuplicateMultiplier { keyword } => {
                write!(f, "multiplier field {keyword} supplied more than once")
            }
            Self::MissingRockField { name } => {
                write!(f, "required rock property {name} not supplied")
            }
            Self::FieldLengthMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "rock property {name} has {actual} entries, expected {expected}"
            ),
            Self::CellCountMismatch { grid, rock } => write!(
                f,
                "rock properties describe {rock} cells, grid has {grid} active cells"
            ),
            Self::InvalidParallelConfig { reason } => {
                write!(f, "invalid parallel configuration: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── ValidationError ────────────────────────────────────────────────

/// Physically inadmissible inputs, detected at construction.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError {
    /// Permeability along the face axis is zero or negative.
    NonPositivePermeability {
        /// Offending cell.
        cell: CellId,
        /// Axis of the permeability component.
        axis: Axis,
        /// The value found.
        value: f64,
    },
    /// Porosity is negative.
    NegativePorosity {
        /// Offending cell.
        cell: CellId,
        /// The value found.
        value: f64,
    },
    /// Net-to-gross is negative.
    NegativeNtg {
        /// Offending cell.
        cell: CellId,
        /// The value found.
        value: f64,
    },
    /// Bulk volume is zero or negative.
    NonPositiveVolume {
        /// Offending cell.
        cell: CellId,
        /// The value found.
        value: f64,
    },
    /// A non-boundary face has zero or negative area.
    DegenerateFaceArea {
        /// Offending face.
        face: FaceId,
        /// The area found.
        area: f64,
    },
    /// A cell centroid lies on the plane of one of its faces.
    DegenerateFaceDistance {
        /// Offending face.
        face: FaceId,
        /// Cell whose centroid is at zero distance.
        cell: CellId,
        /// The distance found.
        distance: f64,
    },
    /// A multiplier value is zero, negative, or not finite.
    InvalidMultiplier {
        /// Keyword of the field.
        keyword: &'static str,
        /// Global cell of the entry.
        global: GlobalCellId,
        /// The value found.
        value: f64,
    },
    /// An input quantity is NaN or infinite.
    NonFinite {
        /// Which quantity.
        what: &'static str,
        /// Index (cell or face) where it was found.
        index: usize,
    },
    /// A half-transmissibility was requested for a side with no cell.
    MissingCell {
        /// The boundary face.
        face: FaceId,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositivePermeability { cell, axis, value } => {
                write!(f, "cell {cell}: permeability {axis} = {value} must be positive")
            }
            Self::NegativePorosity { cell, value } => {
                write!(f, "cell {cell}: porosity {value} is negative")
            }
            Self::NegativeNtg { cell, value } => {
                write!(f, "cell {cell}: net-to-gross {value} is negative")
            }
            Self::NonPositiveVolume { cell, value } => {
                write!(f, "cell {cell}: bulk volume {value} must be positive")
            }
            Self::DegenerateFaceArea { face, area } => {
                write!(f, "face {face}: area {area} must be positive")
            }
            Self::DegenerateFaceDistance {
                face,
                cell,
                distance,
            } => write!(
                f,
                "face {face}: centroid of cell {cell} is {distance} from the face plane"
            ),
            Self::InvalidMultiplier {
                keyword,
                global,
                value,
            } => write!(
                f,
                "multiplier {keyword} at global cell {global} = {value} must be positive and finite"
            ),
            Self::NonFinite { what, index } => write!(f, "{what} at index {index} is not finite"),
            Self::MissingCell { face } => write!(f, "face {face} has no cell on the requested side"),
        }
    }
}

impl Error for ValidationError {}

// ── GeologyError ───────────────────────────────────────────────────

/// Any failure while deriving geology.
#[derive(Clone, Debug, PartialEq)]
pub enum GeologyError {
    /// Structural input problem.
    Config(ConfigError),
    /// Physically inadmissible input.
    Validation(ValidationError),
}

impl fmt::Display for GeologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Validation(e) => write!(f, "validation error: {e}"),
        }
    }
}

impl Error for GeologyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Validation(e) => Some(e),
        }
    }
}

impl From<ConfigError> for GeologyError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ValidationError> for GeologyError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
