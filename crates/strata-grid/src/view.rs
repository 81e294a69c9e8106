//! The core `GridView` trait and face adjacency types.

use strata_core::{Axis, CellId, FaceId, GlobalCellId, Vec3};

/// Which of a face's two adjacent cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceSide {
    /// The cell the face normal points away from.
    Inside,
    /// The cell the face normal points towards.
    Outside,
}

/// The (up to) two cells adjacent to a face.
///
/// `None` is the "no cell" sentinel at the domain boundary or next to an
/// inactive cell. The face normal points from `inside` to `outside`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceCells {
    /// Cell on the side the normal points away from.
    pub inside: Option<CellId>,
    /// Cell on the side the normal points towards.
    pub outside: Option<CellId>,
}

impl FaceCells {
    /// A face between two cells.
    pub fn interior(inside: CellId, outside: CellId) -> Self {
        Self {
            inside: Some(inside),
            outside: Some(outside),
        }
    }

    /// `true` if either side has no cell.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.inside.is_none() || self.outside.is_none()
    }

    /// Both cells, if the face is interior.
    #[inline]
    pub fn pair(&self) -> Option<(CellId, CellId)> {
        match (self.inside, self.outside) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }

    /// The cell on `side`, if any.
    #[inline]
    pub fn cell(&self, side: FaceSide) -> Option<CellId> {
        match side {
            FaceSide::Inside => self.inside,
            FaceSide::Outside => self.outside,
        }
    }
}

/// Read-only view of a mesh: topology, geometry, and the compressed →
/// global index mapping.
///
/// Structured and unstructured backends implement the same capability set;
/// the geology computation only ever sees `&dyn GridView`.
///
/// # Thread Safety
///
/// `Sync` is required because per-face and per-cell work is scattered
/// across a thread pool holding `&dyn GridView`.
pub trait GridView: Send + Sync {
    /// Number of active (compressed) cells.
    fn cell_count(&self) -> usize;

    /// Number of faces, boundary faces included.
    fn face_count(&self) -> usize;

    /// Number of cells in the global (logically Cartesian) numbering,
    /// inactive cells included. Global fields have this length.
    fn global_cell_count(&self) -> usize;

    /// Cells adjacent to `face`.
    fn face_cells(&self, face: FaceId) -> FaceCells;

    /// Bulk volume of `cell`.
    fn cell_volume(&self, cell: CellId) -> f64;

    /// Centroid of `cell`.
    fn cell_centroid(&self, cell: CellId) -> Vec3;

    /// Area of `face`.
    fn face_area(&self, face: FaceId) -> f64;

    /// Unit normal of `face`, pointing from the inside to the outside cell.
    fn face_normal(&self, face: FaceId) -> Vec3;

    /// Centroid of `face`.
    fn face_centroid(&self, face: FaceId) -> Vec3;

    /// Global index of a compressed cell.
    fn global_index(&self, cell: CellId) -> GlobalCellId;

    /// Logical Cartesian dimensions `[nx, ny, nz]`, if the grid has them.
    fn cartesian_dims(&self) -> Option<[usize; 3]> {
        None
    }

    /// Dominant axis of `face`, derived from its normal.
    fn face_axis(&self, face: FaceId) -> Axis {
        Axis::dominant(&self.face_normal(face))
    }

    /// `true` if `face` has fewer than two adjacent cells.
    fn is_boundary_face(&self, face: FaceId) -> bool {
        self.face_cells(face).is_boundary()
    }

    /// Number of faces with two adjacent cells.
    fn interior_face_count(&self) -> usize {
        (0..self.face_count())
            .filter(|&f| !self.is_boundary_face(FaceId(f)))
            .count()
    }
}
