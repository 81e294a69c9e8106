//! Reusable grids, rock and multiplier fixtures.
//!
//! The reference deck is a 2 x 2 x 2 block:
//!
//! - `DXV 1 2`, `DYV 3 4`, `DZV 5 6`, `TOPS 4*100`
//! - `PORO 0.3`, `PERMX 1` (PERMY/PERMZ default to PERMX)
//!
//! Cell sizes differ along every axis, so every interior face has a
//! distinct, hand-computable transmissibility.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use strata_core::{Axis, FaceId, GlobalCellId, Sign};
use strata_geology::{MultiplierKeyword, MultiplierTable, RockFields, RockProperties};
use strata_grid::{CartesianGrid, GridView};

pub const REFERENCE_DIMS: [usize; 3] = [2, 2, 2];
pub const REFERENCE_PORO: f64 = 0.3;
pub const REFERENCE_PERM: f64 = 1.0;

/// Builder for the reference deck geometry, optionally with ACTNUM.
fn reference_builder() -> strata_grid::CartesianGridBuilder {
    let [nx, ny, nz] = REFERENCE_DIMS;
    CartesianGrid::builder()
        .dims(nx, ny, nz)
        .dxv(vec![1.0, 2.0])
        .dyv(vec![3.0, 4.0])
        .dzv(vec![5.0, 6.0])
        .tops(vec![100.0; nx * ny])
}

/// The fully active reference deck.
pub fn reference_grid() -> CartesianGrid {
    reference_builder()
        .build()
        .expect("reference deck is well formed")
}

/// The reference deck with global cell `inactive` switched off.
pub fn reference_grid_without(inactive: usize) -> CartesianGrid {
    let mut actnum = vec![true; REFERENCE_DIMS.iter().product()];
    actnum[inactive] = false;
    reference_builder()
        .actnum(actnum)
        .build()
        .expect("reference deck with ACTNUM is well formed")
}

/// `PERMX 1`, `PORO 0.3` for every global cell.
pub fn reference_fields() -> RockFields {
    let n = REFERENCE_DIMS.iter().product();
    RockFields::new()
        .permx(vec![REFERENCE_PERM; n])
        .poro(vec![REFERENCE_PORO; n])
}

/// Reference rock compressed onto `grid`.
pub fn reference_rock(grid: &dyn GridView) -> RockProperties {
    RockProperties::from_fields(grid, &reference_fields()).expect("reference fields match grid")
}

/// `[1, 2, ..., n]`: multiplier value `g + 1` at global cell `g`.
pub fn counting_field(n: usize) -> Vec<f64> {
    (1..=n).map(|v| v as f64).collect()
}

/// A table whose only field is `keyword`, set to [`counting_field`].
pub fn counting_multipliers(keyword: MultiplierKeyword, global_cell_count: usize) -> MultiplierTable {
    MultiplierTable::new(global_cell_count)
        .with_field(keyword, counting_field(global_cell_count))
        .expect("counting field is valid")
}

/// The global cell on the low and the high side of interior `face` along
/// its axis, for a grid whose normals point along `+axis`.
pub fn low_high_globals(grid: &dyn GridView, face: FaceId) -> Option<(GlobalCellId, GlobalCellId)> {
    let (inside, outside) = grid.face_cells(face).pair()?;
    Some((grid.global_index(inside), grid.global_index(outside)))
}

/// Interior faces along `axis`.
pub fn interior_faces(grid: &dyn GridView, axis: Axis) -> Vec<FaceId> {
    (0..grid.face_count())
        .map(FaceId)
        .filter(|&f| !grid.is_boundary_face(f) && grid.face_axis(f) == axis)
        .collect()
}

/// Multiplier keyword for `axis` and `sign`.
pub fn keyword(axis: Axis, sign: Sign) -> MultiplierKeyword {
    MultiplierKeyword::new(axis, sign)
}

/// Heterogeneous anisotropic rock from a fixed seed.
///
/// Permeabilities are log-uniform in `[1e-2, 1e3]`, porosity uniform in
/// `[0.05, 0.35]`, NTG uniform in `[0.2, 1.0]`.
pub fn random_rock(cell_count: usize, seed: u64) -> RockProperties {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut perm = Vec::with_capacity(cell_count);
    let mut poro = Vec::with_capacity(cell_count);
    let mut ntg = Vec::with_capacity(cell_count);
    for _ in 0..cell_count {
        let mut k = [0.0; 3];
        for v in &mut k {
            *v = 10f64.powf(rng.random_range(-2.0..3.0));
        }
        perm.push(k);
        poro.push(rng.random_range(0.05..0.35));
        ntg.push(rng.random_range(0.2..=1.0));
    }
    RockProperties::new(perm, poro, Some(ntg)).expect("generated arrays have equal length")
}

/// Uniform-spacing box with layered tops, sized for benchmarks.
pub fn box_grid(dims: [usize; 3]) -> CartesianGrid {
    let [nx, ny, nz] = dims;
    CartesianGrid::builder()
        .dims(nx, ny, nz)
        .dxv(vec![50.0; nx])
        .dyv(vec![50.0; ny])
        .dzv((0..nz).map(|k| 2.0 + (k % 3) as f64).collect())
        .uniform_tops(2000.0)
        .build()
        .expect("box grid is well formed")
}
