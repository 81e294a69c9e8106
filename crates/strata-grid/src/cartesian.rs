//! Array-backed structured grid built from per-axis spacing vectors.

use crate::error::GridError;
use crate::global_map::GlobalCellMap;
use crate::view::{FaceCells, GridView};
use strata_core::{Axis, CellId, FaceId, GlobalCellId, Vec3};

/// A logically Cartesian `nx × ny × nz` grid of rectangular cells.
///
/// Cell `(i, j, k)` has extent `DXV[i] × DYV[j] × DZV[k]`; its top sits at
/// `TOPS[column] + sum(DZV[..k])`, so depth grows with `k`. The global
/// index is `i + nx * (j + ny * k)`.
///
/// Faces are numbered X-faces first, then Y, then Z. Within an axis they
/// follow the global order `(k, j, i)` of the face position. A face exists
/// when at least one adjacent cell is active; a face next to an inactive
/// or out-of-range cell is a boundary face. Normals are unit `+axis`, so the
/// inside cell always has the lower index along the face axis.
///
/// # Examples
///
/// ```
/// use strata_grid::{CartesianGrid, GridView};
///
/// let grid = CartesianGrid::builder()
///     .dims(2, 2, 2)
///     .dxv(vec![1.0, 2.0])
///     .dyv(vec![3.0, 4.0])
///     .dzv(vec![5.0, 6.0])
///     .uniform_tops(100.0)
///     .build()
///     .unwrap();
/// assert_eq!(grid.cell_count(), 8);
/// assert_eq!(grid.face_count(), 36);
/// assert_eq!(grid.interior_face_count(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct CartesianGrid {
    dims: [usize; 3],
    map: GlobalCellMap,
    cell_volumes: Vec<f64>,
    cell_centroids: Vec<Vec3>,
    faces: Vec<CartesianFace>,
}

#[derive(Debug, Clone)]
struct CartesianFace {
    cells: FaceCells,
    axis: Axis,
    area: f64,
    centroid: Vec3,
}

/// Builder for [`CartesianGrid`].
///
/// `dims` and the three spacing vectors are required. `TOPS` defaults to
/// zero everywhere and ACTNUM to all-active.
#[derive(Debug, Clone, Default)]
pub struct CartesianGridBuilder {
    dims: Option<[usize; 3]>,
    dxv: Vec<f64>,
    dyv: Vec<f64>,
    dzv: Vec<f64>,
    tops: Option<Vec<f64>>,
    actnum: Option<Vec<bool>>,
}

impl CartesianGridBuilder {
    /// Logical dimensions.
    pub fn dims(mut self, nx: usize, ny: usize, nz: usize) -> Self {
        self.dims = Some([nx, ny, nz]);
        self
    }

    /// Cell widths along X, one per `i`.
    pub fn dxv(mut self, dxv: Vec<f64>) -> Self {
        self.dxv = dxv;
        self
    }

    /// Cell widths along Y, one per `j`.
    pub fn dyv(mut self, dyv: Vec<f64>) -> Self {
        self.dyv = dyv;
        self
    }

    /// Cell thicknesses along Z, one per `k`.
    pub fn dzv(mut self, dzv: Vec<f64>) -> Self {
        self.dzv = dzv;
        self
    }

    /// Depth of the top of each column, `nx * ny` values in `(j, i)` order.
    pub fn tops(mut self, tops: Vec<f64>) -> Self {
        self.tops = Some(tops);
        self
    }

    /// Same top depth for every column.
    pub fn uniform_tops(mut self, top: f64) -> Self {
        self.tops = Some(vec![top]);
        self
    }

    /// Activity flag per global cell. Inactive cells are removed from the
    /// compressed numbering.
    pub fn actnum(mut self, actnum: Vec<bool>) -> Self {
        self.actnum = Some(actnum);
        self
    }

    /// Validate inputs and build the grid.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyGrid`] if dims are missing or any is zero
    /// - [`GridError::DimensionMismatch`] if a spacing vector, `TOPS`, or
    ///   `ACTNUM` has the wrong length
    /// - [`GridError::InvalidSpacing`] for a non-positive or non-finite spacing
    /// - [`GridError::NoActiveCells`] if ACTNUM deactivates everything
    pub fn build(self) -> Result<CartesianGrid, GridError> {
        let dims = self.dims.ok_or(GridError::EmptyGrid)?;
        if dims.contains(&0) {
            return Err(GridError::EmptyGrid);
        }
        let [nx, ny, nz] = dims;
        check_spacing("DXV", &self.dxv, nx)?;
        check_spacing("DYV", &self.dyv, ny)?;
        check_spacing("DZV", &self.dzv, nz)?;

        let columns = nx * ny;
        let tops = match self.tops {
            None => vec![0.0; columns],
            Some(t) if t.len() == 1 => vec![t[0]; columns],
            Some(t) if t.len() == columns => t,
            Some(t) => {
                return Err(GridError::DimensionMismatch {
                    name: "TOPS",
                    expected: columns,
                    actual: t.len(),
                })
            }
        };
        if let Some(col) = tops.iter().position(|t| !t.is_finite()) {
            return Err(GridError::InvalidSpacing {
                name: "TOPS",
                index: col,
                value: tops[col],
            });
        }

        let global_cells = columns * nz;
        let map = match self.actnum {
            None => GlobalCellMap::identity(global_cells),
            Some(a) if a.len() == global_cells => GlobalCellMap::from_active_mask(&a)?,
            Some(a) => {
                return Err(GridError::DimensionMismatch {
                    name: "ACTNUM",
                    expected: global_cells,
                    actual: a.len(),
                })
            }
        };

        let geom = Geometry::new(&self.dxv, &self.dyv, &self.dzv, tops);
        let (cell_volumes, cell_centroids): (Vec<f64>, Vec<Vec3>) = map
            .as_slice()
            .iter()
            .map(|&g| {
                let [i, j, k] = ijk_of(dims, g);
                (
                    self.dxv[i] * self.dyv[j] * self.dzv[k],
                    geom.cell_centroid(i, j, k),
                )
            })
            .unzip();

        let faces = build_faces(dims, &map, &geom, &self.dxv, &self.dyv, &self.dzv);

        Ok(CartesianGrid {
            dims,
            map,
            cell_volumes,
            cell_centroids,
            faces,
        })
    }
}

impl CartesianGrid {
    /// Create a new builder.
    pub fn builder() -> CartesianGridBuilder {
        CartesianGridBuilder::default()
    }

    /// Fully active grid with constant cell size `[dx, dy, dz]` and tops at zero.
    pub fn uniform(dims: [usize; 3], size: [f64; 3]) -> Result<Self, GridError> {
        let [nx, ny, nz] = dims;
        Self::builder()
            .dims(nx, ny, nz)
            .dxv(vec![size[0]; nx])
            .dyv(vec![size[1]; ny])
            .dzv(vec![size[2]; nz])
            .build()
    }

    /// Logical dimensions `[nx, ny, nz]`.
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// The compressed ↔ global index table.
    pub fn global_map(&self) -> &GlobalCellMap {
        &self.map
    }

    /// Logical `(i, j, k)` of a global cell.
    pub fn ijk(&self, global: GlobalCellId) -> [usize; 3] {
        ijk_of(self.dims, global)
    }

    /// Global index of `(i, j, k)`, or `None` if out of range.
    pub fn global_at(&self, i: usize, j: usize, k: usize) -> Option<GlobalCellId> {
        let [nx, ny, nz] = self.dims;
        if i < nx && j < ny && k < nz {
            Some(GlobalCellId(i + nx * (j + ny * k)))
        } else {
            None
        }
    }

    /// Active cell at `(i, j, k)`, or `None` if inactive or out of range.
    pub fn cell_at(&self, i: usize, j: usize, k: usize) -> Option<CellId> {
        self.global_at(i, j, k)
            .and_then(|g| self.map.compressed(g))
    }
}

impl GridView for CartesianGrid {
    fn cell_count(&self) -> usize {
        self.map.cell_count()
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
        self.faces[face.index()].axis.unit()
    }

    fn face_centroid(&self, face: FaceId) -> Vec3 {
        self.faces[face.index()].centroid
    }

    fn global_index(&self, cell: CellId) -> GlobalCellId {
        self.map.global(cell)
    }

    fn cartesian_dims(&self) -> Option<[usize; 3]> {
        Some(self.dims)
    }

    fn face_axis(&self, face: FaceId) -> Axis {
        self.faces[face.index()].axis
    }
}

// ── construction helpers ─────────────────────────────────────────────

fn check_spacing(name: &'static str, v: &[f64], n: usize) -> Result<(), GridError> {
    if v.len() != n {
        return Err(GridError::DimensionMismatch {
            name,
            expected: n,
            actual: v.len(),
        });
    }
    match v.iter().position(|&d| !(d.is_finite() && d > 0.0)) {
        Some(index) => Err(GridError::InvalidSpacing {
            name,
            index,
            value: v[index],
        }),
        None => Ok(()),
    }
}

fn ijk_of(dims: [usize; 3], global: GlobalCellId) -> [usize; 3] {
    let [nx, ny, _] = dims;
    let g = global.index();
    [g % nx, (g / nx) % ny, g / (nx * ny)]
}

/// Cumulative edge positions along one axis: `edges[i]` is the start of cell `i`.
fn edges(spacing: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(spacing.len() + 1);
    let mut acc = 0.0;
    out.push(acc);
    for d in spacing {
        acc += d;
        out.push(acc);
    }
    out
}

struct Geometry {
    nx: usize,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    tops: Vec<f64>,
}

impl Geometry {
    fn new(dxv: &[f64], dyv: &[f64], dzv: &[f64], tops: Vec<f64>) -> Self {
        Self {
            nx: dxv.len(),
            x: edges(dxv),
            y: edges(dyv),
            z: edges(dzv),
            tops,
        }
    }

    fn x_mid(&self, i: usize) -> f64 {
        0.5 * (self.x[i] + self.x[i + 1])
    }

    fn y_mid(&self, j: usize) -> f64 {
        0.5 * (self.y[j] + self.y[j + 1])
    }

    fn depth_mid(&self, i: usize, j: usize, k: usize) -> f64 {
        self.tops[i + self.nx * j] + 0.5 * (self.z[k] + self.z[k + 1])
    }

    fn cell_centroid(&self, i: usize, j: usize, k: usize) -> Vec3 {
        [self.x_mid(i), self.y_mid(j), self.depth_mid(i, j, k)]
    }
}

/// Mean of `f` over the in-range positions `lo - 1` and `lo` on an axis of
/// length `n`; `lo` is a face position in `0..=n`.
fn mean_across(lo: usize, n: usize, f: impl Fn(usize) -> f64) -> f64 {
    match (lo > 0, lo < n) {
        (true, true) => 0.5 * (f(lo - 1) + f(lo)),
        (true, false) => f(lo - 1),
        _ => f(lo),
    }
}

fn build_faces(
    dims: [usize; 3],
    map: &GlobalCellMap,
    geom: &Geometry,
    dxv: &[f64],
    dyv: &[f64],
    dzv: &[f64],
) -> Vec<CartesianFace> {
    let [nx, ny, nz] = dims;
    let active = |i: usize, j: usize, k: usize| map.compressed(GlobalCellId(i + nx * (j + ny * k)));
    let mut faces = Vec::with_capacity((nx + 1) * ny * nz + nx * (ny + 1) * nz + nx * ny * (nz + 1));

    let mut push = |lower: Option<CellId>, upper: Option<CellId>, axis, area, centroid| {
        if lower.is_some() || upper.is_some() {
            faces.push(CartesianFace {
                cells: FaceCells {
                    inside: lower,
                    outside: upper,
                },
                axis,
                area,
                centroid,
            });
        }
    };

    for k in 0..nz {
        for j in 0..ny {
            for i in 0..=nx {
                let lower = if i > 0 { active(i - 1, j, k) } else { None };
                let upper = if i < nx { active(i, j, k) } else { None };
                let depth = mean_across(i, nx, |ii| geom.depth_mid(ii, j, k));
                let centroid = [geom.x[i], geom.y_mid(j), depth];
                push(lower, upper, Axis::X, dyv[j] * dzv[k], centroid);
            }
        }
    }

    for k in 0..nz {
        for j in 0..=ny {
            for i in 0..nx {
                let lower = if j > 0 { active(i, j - 1, k) } else { None };
                let upper = if j < ny { active(i, j, k) } else { None };
                let depth = mean_across(j, ny, |jj| geom.depth_mid(i, jj, k));
                let centroid = [geom.x_mid(i), geom.y[j], depth];
                push(lower, upper, Axis::Y, dxv[i] * dzv[k], centroid);
            }
        }
    }

    for k in 0..=nz {
        for j in 0..ny {
            for i in 0..nx {
                let lower = if k > 0 { active(i, j, k - 1) } else { None };
                let upper = if k < nz { active(i, j, k) } else { None };
                let depth = geom.tops[i + nx * j] + geom.z[k];
                let centroid = [geom.x_mid(i), geom.y_mid(j), depth];
                push(lower, upper, Axis::Z, dxv[i] * dyv[j], centroid);
            }
        }
    }

    faces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn reference_grid() -> CartesianGrid {
        CartesianGrid::builder()
            .dims(2, 2, 2)
            .dxv(vec![1.0, 2.0])
            .dyv(vec![3.0, 4.0])
            .dzv(vec![5.0, 6.0])
            .tops(vec![100.0; 4])
            .build()
            .unwrap()
    }

    #[test]
    fn reference_grid_counts() {
        let g = reference_grid();
        assert_eq!(g.cell_count(), 8);
        assert_eq!(g.global_cell_count(), 8);
        assert_eq!(g.face_count(), 36);
        assert_eq!(g.interior_face_count(), 12);
        assert_eq!(g.cartesian_dims(), Some([2, 2, 2]));
        assert!(g.global_map().is_identity());
    }

    #[test]
    fn reference_grid_geometry() {
        let g = reference_grid();
        assert_eq!(g.cell_centroid(CellId(0)), [0.5, 1.5, 102.5]);
        assert_eq!(g.cell_centroid(CellId(7)), [2.0, 5.0, 108.0]);
        assert!((g.cell_volume(CellId(7)) - 48.0).abs() < 1e-12);
        let total: f64 = (0..8).map(|c| g.cell_volume(CellId(c))).sum();
        assert!((total - 231.0).abs() < 1e-12);
    }

    #[test]
    fn first_interior_x_face() {
        let g = reference_grid();
        // X-faces of row (j=0, k=0): i = 0, 1, 2.
        let f = FaceId(1);
        assert_eq!(g.face_cells(f), FaceCells::interior(CellId(0), CellId(1)));
        assert_eq!(g.face_axis(f), Axis::X);
        assert!((g.face_area(f) - 15.0).abs() < 1e-12);
        assert_eq!(g.face_centroid(f), [1.0, 1.5, 102.5]);
        assert_eq!(g.face_normal(f), [1.0, 0.0, 0.0]);
        assert!(g.is_boundary_face(FaceId(0)));
        assert!(g.is_boundary_face(FaceId(2)));
    }

    #[test]
    fn z_faces_follow_depth() {
        let g = reference_grid();
        // Z-faces start after 12 X-faces and 12 Y-faces; layer k=1 starts at 24 + 4.
        let f = FaceId(28);
        assert_eq!(g.face_axis(f), Axis::Z);
        assert_eq!(g.face_cells(f), FaceCells::interior(CellId(0), CellId(4)));
        assert!((g.face_centroid(f)[2] - 105.0).abs() < 1e-12);
        assert!((g.face_area(f) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn ijk_round_trip() {
        let g = reference_grid();
        for gi in 0..8 {
            let [i, j, k] = g.ijk(GlobalCellId(gi));
            assert_eq!(g.global_at(i, j, k), Some(GlobalCellId(gi)));
        }
        assert_eq!(g.global_at(2, 0, 0), None);
    }

    #[test]
    fn actnum_compresses_and_opens_boundaries() {
        let mut actnum = vec![true; 8];
        actnum[1] = false;
        let g = CartesianGrid::builder()
            .dims(2, 2, 2)
            .dxv(vec![1.0, 2.0])
            .dyv(vec![3.0, 4.0])
            .dzv(vec![5.0, 6.0])
            .actnum(actnum)
            .build()
            .unwrap();
        assert_eq!(g.cell_count(), 7);
        assert_eq!(g.global_cell_count(), 8);
        assert_eq!(g.global_index(CellId(1)), GlobalCellId(2));
        assert_eq!(g.cell_at(1, 0, 0), None);
        // Three faces of global cell 1 vanish (its outer X, Y-low and Z-low
        // sides) and its three interior faces become boundary faces.
        assert_eq!(g.face_count(), 33);
        assert_eq!(g.interior_face_count(), 9);
        compliance::run_full_compliance(&g);
    }

    #[test]
    fn tops_broadcast_and_mismatch() {
        let g = CartesianGrid::builder()
            .dims(1, 1, 1)
            .dxv(vec![1.0])
            .dyv(vec![1.0])
            .dzv(vec![2.0])
            .uniform_tops(50.0)
            .build()
            .unwrap();
        assert_eq!(g.cell_centroid(CellId(0)), [0.5, 0.5, 51.0]);

        let err = CartesianGrid::builder()
            .dims(2, 1, 1)
            .dxv(vec![1.0, 1.0])
            .dyv(vec![1.0])
            .dzv(vec![1.0])
            .tops(vec![0.0, 0.0, 0.0])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GridError::DimensionMismatch {
                name: "TOPS",
                expected: 2,
                actual: 3,
            }
        );
    }

    #[test]
    fn invalid_spacing_rejected() {
        let err = CartesianGrid::builder()
            .dims(2, 1, 1)
            .dxv(vec![1.0, 0.0])
            .dyv(vec![1.0])
            .dzv(vec![1.0])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidSpacing {
                name: "DXV",
                index: 1,
                value: 0.0,
            }
        );
    }

    #[test]
    fn missing_or_zero_dims_rejected() {
        assert_eq!(CartesianGrid::builder().build().unwrap_err(), GridError::EmptyGrid);
        assert_eq!(
            CartesianGrid::uniform([0, 1, 1], [1.0; 3]).unwrap_err(),
            GridError::EmptyGrid
        );
    }

    #[test]
    fn compliance_reference() {
        compliance::run_full_compliance(&reference_grid());
    }

    #[test]
    fn compliance_varying_tops() {
        let g = CartesianGrid::builder()
            .dims(3, 2, 2)
            .dxv(vec![1.0, 1.5, 2.0])
            .dyv(vec![2.0, 1.0])
            .dzv(vec![1.0, 3.0])
            .tops(vec![10.0, 10.5, 11.0, 10.2, 10.7, 11.2])
            .build()
            .unwrap();
        compliance::run_full_compliance(&g);
    }

    proptest! {
        #[test]
        fn face_counts_match_formula(nx in 1usize..5, ny in 1usize..5, nz in 1usize..5) {
            let g = CartesianGrid::uniform([nx, ny, nz], [1.0, 2.0, 0.5]).unwrap();
            let faces = (nx + 1) * ny * nz + nx * (ny + 1) * nz + nx * ny * (nz + 1);
            let interior = (nx - 1) * ny * nz + nx * (ny - 1) * nz + nx * ny * (nz - 1);
            prop_assert_eq!(g.face_count(), faces);
            prop_assert_eq!(g.interior_face_count(), interior);
            prop_assert_eq!(g.cell_count(), nx * ny * nz);
        }

        #[test]
        fn interior_faces_step_one_cell_along_axis(nx in 1usize..4, ny in 1usize..4, nz in 1usize..4) {
            let g = CartesianGrid::uniform([nx, ny, nz], [1.0, 1.0, 1.0]).unwrap();
            let stride = [1, nx, nx * ny];
            for f in 0..g.face_count() {
                let face = FaceId(f);
                if let Some((a, b)) = g.face_cells(face).pair() {
                    let ga = g.global_index(a).index();
                    let gb = g.global_index(b).index();
                    prop_assert_eq!(gb - ga, stride[g.face_axis(face).index()]);
                }
            }
        }
    }
}
