//! Topology-backed unstructured grid.
//!
//! Holds explicit per-cell and per-face arrays, as produced by corner-point
//! processing or any external mesher. Cells may be numbered in any order;
//! the link to the global numbering is the explicit [`GlobalCellMap`].

use crate::error::GridError;
use crate::global_map::GlobalCellMap;
use crate::view::{FaceCells, GridView};
use smallvec::SmallVec;
use strata_core::axis::{dot, norm, sub};
use strata_core::{CellId, FaceId, GlobalCellId, Vec3};

const NORMAL_TOLERANCE: f64 = 1e-9;

/// Geometry and adjacency of one face.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceGeometry {
    /// Adjacent cells; the normal points from `inside` to `outside`.
    pub cells: FaceCells,
    /// Face area.
    pub area: f64,
    /// Unit normal.
    pub normal: Vec3,
    /// Face centroid.
    pub centroid: Vec3,
}

/// An unstructured (possibly faulted or re-indexed) grid.
///
/// # Examples
///
/// ```
/// use strata_core::{CellId, GlobalCellId};
/// use strata_grid::{FaceCells, FaceGeometry, GlobalCellMap, GridView, UnstructuredGrid};
///
/// // Two unit cubes side by side along X, stored in reverse global order.
/// let map = GlobalCellMap::new(2, vec![GlobalCellId(1), GlobalCellId(0)]).unwrap();
/// let face = FaceGeometry {
///     cells: FaceCells::interior(CellId(1), CellId(0)),
///     area: 1.0,
///     normal: [1.0, 0.0, 0.0],
///     centroid: [1.0, 0.5, 0.5],
/// };
/// let grid = UnstructuredGrid::new(
///     vec![1.0, 1.0],
///     vec![[1.5, 0.5, 0.5], [0.5, 0.5, 0.5]],
///     map,
///     vec![face],
/// )
/// .unwrap();
/// assert_eq!(grid.interior_face_count(), 1);
/// assert_eq!(grid.global_index(CellId(0)), GlobalCellId(1));
/// ```
#[derive(Clone, Debug)]
pub struct UnstructuredGrid {
    cell_volumes: Vec<f64>,
    cell_centroids: Vec<Vec3>,
    map: GlobalCellMap,
    faces: Vec<FaceGeometry>,
    cell_faces: Vec<SmallVec<[FaceId; 6]>>,
    cartesian_dims: Option<[usize; 3]>,
}

impl UnstructuredGrid {
    /// Build from explicit arrays.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyGrid`] if there are no cells
    /// - [`GridError::DimensionMismatch`] if volumes, centroids and the
    ///   global map disagree on the cell count
    /// - [`GridError::CellOutOfRange`], [`GridError::OrphanFace`],
    ///   [`GridError::SelfAdjacentFace`], [`GridError::NonUnitNormal`] for
    ///   malformed faces
    /// - [`GridError::MisorientedFace`] if an interior face normal does not
    ///   point from its inside cell towards its outside cell
    pub fn new(
        cell_volumes: Vec<f64>,
        cell_centroids: Vec<Vec3>,
        map: GlobalCellMap,
        faces: Vec<FaceGeometry>,
    ) -> Result<Self, GridError> {
        let n = cell_volumes.len();
        if n == 0 {
            return Err(GridError::EmptyGrid);
        }
        if cell_centroids.len() != n {
            return Err(GridError::DimensionMismatch {
                name: "cell_centroids",
                expected: n,
                actual: cell_centroids.len(),
            });
        }
        if map.cell_count() != n {
            return Err(GridError::DimensionMismatch {
                name: "global_map",
                expected: n,
                actual: map.cell_count(),
            });
        }

        let mut cell_faces: Vec<SmallVec<[FaceId; 6]>> = vec![SmallVec::new(); n];
        for (f, face) in faces.iter().enumerate() {
            let id = FaceId(f);
            let FaceCells { inside, outside } = face.cells;
            if inside.is_none() && outside.is_none() {
                return Err(GridError::OrphanFace { face: id });
            }
            if inside.is_some() && inside == outside {
                return Err(GridError::SelfAdjacentFace { face: id });
            }
            for cell in [inside, outside].into_iter().flatten() {
                let slot = cell_faces.get_mut(cell.index()).ok_or(GridError::CellOutOfRange {
                    face: id,
                    cell,
                    cell_count: n,
                })?;
                slot.push(id);
            }
            let length = norm(&face.normal);
            if length.is_nan() || (length - 1.0).abs() > NORMAL_TOLERANCE {
                return Err(GridError::NonUnitNormal { face: id, length });
            }
            if let Some((inside, outside)) = face.cells.pair() {
                let offset = sub(
                    &cell_centroids[outside.index()],
                    &cell_centroids[inside.index()],
                );
                let projection = dot(&face.normal, &offset);
                if !(projection > 0.0) {
                    return Err(GridError::MisorientedFace { face: id, projection });
                }
            }
        }

        Ok(Self {
            cell_volumes,
            cell_centroids,
            map,
            faces,
            cell_faces,
            cartesian_dims: None,
        })
    }

    /// Snapshot any grid into an unstructured representation with the same
    /// numbering, geometry and global mapping.
    pub fn from_view(view: &dyn GridView) -> Result<Self, GridError> {
        let cells = 0..view.cell_count();
        let volumes = cells.clone().map(|c| view.cell_volume(CellId(c))).collect();
        let centroids = cells.clone().map(|c| view.cell_centroid(CellId(c))).collect();
        let globals = cells.map(|c| view.global_index(CellId(c))).collect();
        let map = GlobalCellMap::new(view.global_cell_count(), globals)?;
        let faces = (0..view.face_count())
            .map(|f| {
                let face = FaceId(f);
                FaceGeometry {
                    cells: view.face_cells(face),
                    area: view.face_area(face),
                    normal: view.face_normal(face),
                    centroid: view.face_centroid(face),
                }
            })
            .collect();
        let mut grid = Self::new(volumes, centroids, map, faces)?;
        grid.cartesian_dims = view.cartesian_dims();
        Ok(grid)
    }

    /// Attach logical Cartesian dimensions (e.g. for corner-point grids).
    pub fn with_cartesian_dims(mut self, dims: [usize; 3]) -> Self {
        self.cartesian_dims = Some(dims);
        self
    }

    /// Faces adjacent to `cell`, in face order.
    pub fn cell_faces(&self, cell: CellId) -> &[FaceId] {
        &self.cell_faces[cell.index()]
    }

    /// The compressed ↔ global index table.
    pub fn global_map(&self) -> &GlobalCellMap {
        &self.map
    }

    /// Geometry of `face`.
    pub fn face(&self, face: FaceId) -> &FaceGeometry {
        &self.faces[face.index()]
    }
}

impl GridView for UnstructuredGrid {
    fn cell_count(&self) -> usize {
        self.cell_volumes.len()
    }

    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn global_cell_count(&self) -> usize {
        self.map.global_cell_count()
    }

    fn face_cells(&self, face: FaceId) -> FaceCells {
        self.faces[face.index()].cells
    }

    fn cell_volume(&self, cell: CellId) -> f64 {
        self.cell_volumes[cell.index()]
    }

    fn cell_centroid(&self, cell: CellId) -> Vec3 {
        self.cell_centroids[cell.index()]
    }

    fn face_area(&self, face: FaceId) -> f64 {
        self.faces[face.index()].area
    }

    fn face_normal(&self, face: FaceId) -> Vec3 {
        self.faces[face.index()].normal
    }

    fn face_centroid(&self, face: FaceId) -> Vec3 {
        self.faces[face.index()].centroid
    }

    fn global_index(&self, cell: CellId) -> GlobalCellId {
        self.map.global(cell)
    }

    fn cartesian_dims(&self) -> Option<[usize; 3]> {
        self.cartesian_dims
    }
}
