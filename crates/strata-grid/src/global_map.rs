//! Explicit compressed ↔ global cell index table.
//!
//! Property and multiplier fields are authored per global (logically
//! Cartesian) cell, while geology runs over the compressed numbering of
//! active cells. The translation is an array lookup in both directions,
//! never an implicit traversal order.

use crate::error::GridError;
use strata_core::{CellId, GlobalCellId};

/// Bidirectional array-backed mapping between compressed and global cells.
///
/// # Examples
///
/// ```
/// use strata_core::{CellId, GlobalCellId};
/// use strata_grid::GlobalCellMap;
///
/// // Global cells 0..4, cell 1 inactive.
/// let map = GlobalCellMap::from_active_mask(&[true, false, true, true]).unwrap();
/// assert_eq!(map.cell_count(), 3);
/// assert_eq!(map.global(CellId(1)), GlobalCellId(2));
/// assert_eq!(map.compressed(GlobalCellId(1)), None);
/// assert_eq!(map.compressed(GlobalCellId(3)), Some(CellId(2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlobalCellMap {
    to_global: Vec<GlobalCellId>,
    to_compressed: Vec<Option<CellId>>,
}

impl GlobalCellMap {
    /// Identity mapping for a grid where every global cell is active.
    pub fn identity(cell_count: usize) -> Self {
        Self {
            to_global: (0..cell_count).map(GlobalCellId).collect(),
            to_compressed: (0..cell_count).map(|c| Some(CellId(c))).collect(),
        }
    }

    /// Build from an explicit compressed → global table.
    ///
    /// Returns `Err` if a global index is `>= global_cell_count` or is
    /// mapped by more than one compressed cell.
    pub fn new(global_cell_count: usize, to_global: Vec<GlobalCellId>) -> Result<Self, GridError> {
        let mut to_compressed = vec![None; global_cell_count];
        for (c, &g) in to_global.iter().enumerate() {
            let slot = to_compressed.get_mut(g.index()).ok_or(GridError::GlobalIndexOutOfRange {
                cell: CellId(c),
                global: g,
                global_cell_count,
            })?;
            if slot.is_some() {
                return Err(GridError::DuplicateGlobalIndex { global: g });
            }
            *slot = Some(CellId(c));
        }
        Ok(Self {
            to_global,
            to_compressed,
        })
    }

    /// Build from a per-global-cell activity mask (ACTNUM). Active cells are
    /// numbered in global order.
    pub fn from_active_mask(active: &[bool]) -> Result<Self, GridError> {
        let to_global: Vec<GlobalCellId> = active
            .iter()
            .enumerate()
            .filter(|&(_, &a)| a)
            .map(|(g, _)| GlobalCellId(g))
            .collect();
        if to_global.is_empty() {
            return Err(GridError::NoActiveCells);
        }
        Self::new(active.len(), to_global)
    }

    /// Number of compressed (active) cells.
    pub fn cell_count(&self) -> usize {
        self.to_global.len()
    }

    /// Number of global cells.
    pub fn global_cell_count(&self) -> usize {
        self.to_compressed.len()
    }

    /// Global index of a compressed cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range.
    #[inline]
    pub fn global(&self, cell: CellId) -> GlobalCellId {
        self.to_global[cell.index()]
    }

    /// Compressed index of a global cell, or `None` if it is inactive or
    /// out of range.
    #[inline]
    pub fn compressed(&self, global: GlobalCellId) -> Option<CellId> {
        self.to_compressed.get(global.index()).copied().flatten()
    }

    /// `true` if compressed and global numbering coincide.
    pub fn is_identity(&self) -> bool {
        self.cell_count() == self.global_cell_count()
            && self.to_global.iter().enumerate().all(|(c, g)| g.index() == c)
    }

    /// The compressed → global table.
    pub fn as_slice(&self) -> &[GlobalCellId] {
        &self.to_global
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identity_is_identity() {
        let map = GlobalCellMap::identity(5);
        assert!(map.is_identity());
        assert_eq!(map.global(CellId(4)), GlobalCellId(4));
        assert_eq!(map.compressed(GlobalCellId(2)), Some(CellId(2)));
        assert_eq!(map.compressed(GlobalCellId(5)), None);
    }

    #[test]
    fn permuted_table_is_not_identity() {
        let map = GlobalCellMap::new(3, vec![GlobalCellId(2), GlobalCellId(0), GlobalCellId(1)])
            .unwrap();
        assert!(!map.is_identity());
        assert_eq!(map.compressed(GlobalCellId(2)), Some(CellId(0)));
        assert_eq!(map.as_slice(), &[GlobalCellId(2), GlobalCellId(0), GlobalCellId(1)]);
    }

    #[test]
    fn out_of_range_global_rejected() {
        let err = GlobalCellMap::new(2, vec![GlobalCellId(0), GlobalCellId(2)]).unwrap_err();
        assert_eq!(
            err,
            GridError::GlobalIndexOutOfRange {
                cell: CellId(1),
                global: GlobalCellId(2),
                global_cell_count: 2,
            }
        );
    }

    #[test]
    fn duplicate_global_rejected() {
        let err = GlobalCellMap::new(4, vec![GlobalCellId(3), GlobalCellId(3)]).unwrap_err();
        assert_eq!(err, GridError::DuplicateGlobalIndex { global: GlobalCellId(3) });
    }

    #[test]
    fn all_inactive_rejected() {
        assert_eq!(
            GlobalCellMap::from_active_mask(&[false, false]).unwrap_err(),
            GridError::NoActiveCells
        );
    }

    proptest! {
        #[test]
        fn active_mask_round_trips(mask in proptest::collection::vec(any::<bool>(), 1..64)) {
            prop_assume!(mask.iter().any(|&a| a));
            let map = GlobalCellMap::from_active_mask(&mask).unwrap();
            prop_assert_eq!(map.cell_count(), mask.iter().filter(|&&a| a).count());
            for c in 0..map.cell_count() {
                let g = map.global(CellId(c));
                prop_assert!(mask[g.index()]);
                prop_assert_eq!(map.compressed(g), Some(CellId(c)));
            }
            for (g, &a) in mask.iter().enumerate() {
                prop_assert_eq!(map.compressed(GlobalCellId(g)).is_some(), a);
            }
        }
    }
}
