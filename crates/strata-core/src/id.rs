//! Strongly-typed cell and face identifiers.
//!
//! Two numbering spaces coexist: the *compressed* numbering of active cells
//! (`0..cell_count`) that every computation runs in, and the *global*
//! (logically Cartesian) numbering in which property and multiplier fields
//! are authored. Keeping them as distinct types makes it impossible to index
//! a global field with a compressed id by accident.

use std::fmt;

/// Compressed index of an active cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub usize);

impl CellId {
    /// The raw index, for slicing per-cell arrays.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for CellId {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

/// Compressed index of a face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

impl FaceId {
    /// The raw index, for slicing per-face arrays.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for FaceId {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

/// Global (logically Cartesian) index of a cell, including inactive cells.
///
/// Property and multiplier fields are authored in this numbering. For a
/// structured `nx × ny × nz` grid it is `i + nx * (j + ny * k)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlobalCellId(pub usize);

impl GlobalCellId {
    /// The raw index, for slicing global fields.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for GlobalCellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for GlobalCellId {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_as_raw_index() {
        assert_eq!(CellId(3).to_string(), "3");
        assert_eq!(FaceId(12).to_string(), "12");
        assert_eq!(GlobalCellId(7).to_string(), "7");
    }

    #[test]
    fn ids_round_trip_through_usize() {
        assert_eq!(CellId::from(4).index(), 4);
        assert_eq!(FaceId::from(9).index(), 9);
        assert_eq!(GlobalCellId::from(0).index(), 0);
    }
}
