//! GridView trait compliance test helpers.
//!
//! These functions verify that a GridView implementation satisfies the
//! invariants the geology computation relies on. Reused across both
//! backend test modules (CartesianGrid, UnstructuredGrid).

use crate::view::GridView;
use indexmap::IndexSet;
use strata_core::axis::{dot, norm, sub};
use strata_core::{CellId, FaceId};

/// Assert every face references cells within `0..cell_count`.
pub fn assert_face_cells_in_range(grid: &dyn GridView) {
    for f in 0..grid.face_count() {
        let fc = grid.face_cells(FaceId(f));
        for c in [fc.inside, fc.outside].into_iter().flatten() {
            assert!(
                c.index() < grid.cell_count(),
                "face {f} references cell {c}, grid has {} cells",
                grid.cell_count()
            );
        }
        assert!(
            fc.inside.is_some() || fc.outside.is_some(),
            "face {f} has no adjacent cell"
        );
    }
}

/// Assert every face normal has unit length.
pub fn assert_normals_unit(grid: &dyn GridView) {
    for f in 0..grid.face_count() {
        let n = grid.face_normal(FaceId(f));
        let len = norm(&n);
        assert!((len - 1.0).abs() < 1e-9, "face {f} normal length {len}");
    }
}

/// Assert every interior face has positive area and that its normal points
/// from the inside cell's centroid to the outside cell's centroid.
pub fn assert_interior_faces_oriented(grid: &dyn GridView) {
    for f in 0..grid.face_count() {
        let face = FaceId(f);
        let Some((a, b)) = grid.face_cells(face).pair() else {
            continue;
        };
        let area = grid.face_area(face);
        assert!(area > 0.0, "interior face {f} area {area}");
        let n = grid.face_normal(face);
        let fc = grid.face_centroid(face);
        let da = dot(&n, &sub(&fc, &grid.cell_centroid(a)));
        let db = dot(&n, &sub(&grid.cell_centroid(b), &fc));
        assert!(da > 0.0, "face {f}: inside cell {a} not behind the face ({da})");
        assert!(db > 0.0, "face {f}: outside cell {b} not in front of the face ({db})");
    }
}

/// Assert every cell has positive bulk volume.
pub fn assert_volumes_positive(grid: &dyn GridView) {
    for c in 0..grid.cell_count() {
        let v = grid.cell_volume(CellId(c));
        assert!(v > 0.0, "cell {c} volume {v}");
    }
}

/// Assert the compressed → global mapping is injective and in range.
pub fn assert_global_index_injective(grid: &dyn GridView) {
    let globals: IndexSet<_> = (0..grid.cell_count())
        .map(|c| grid.global_index(CellId(c)))
        .collect();
    assert_eq!(
        globals.len(),
        grid.cell_count(),
        "global_index maps two cells to the same global cell"
    );
    for g in &globals {
        assert!(
            g.index() < grid.global_cell_count(),
            "global index {g} >= global_cell_count {}",
            grid.global_cell_count()
        );
    }
}

/// Run all 5 compliance checks on a grid.
pub fn run_full_compliance(grid: &dyn GridView) {
    assert_face_cells_in_range(grid);
    assert_normals_unit(grid);
    assert_interior_faces_oriented(grid);
    assert_volumes_positive(grid);
    assert_global_index_injective(grid);
}
