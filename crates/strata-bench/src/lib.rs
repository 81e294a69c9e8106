//! Benchmark profiles for the Strata geology derivation.
//!
//! - [`reference_case`]: 50x50x20 box (50K cells)
//! - [`stress_case`]: 100x100x30 box (300K cells)
//!
//! Rock is seeded, so every run measures the same inputs.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strata_core::{Axis, GlobalCellId, Sign};
use strata_geology::{MultiplierKeyword, MultiplierTable, RockProperties};
use strata_grid::{CartesianGrid, GridView};
use strata_test_utils::{box_grid, random_rock};

/// Inputs for one derivation.
pub struct BenchCase {
    pub grid: CartesianGrid,
    pub rock: RockProperties,
    pub multipliers: MultiplierTable,
}

/// Build a case of the given dimensions.
///
/// Every 11th global cell carries a `MULTZ` barrier of 1e-3 so the
/// multiplier path is exercised.
pub fn case(dims: [usize; 3], seed: u64) -> BenchCase {
    let grid = box_grid(dims);
    let rock = random_rock(grid.cell_count(), seed);
    let global = grid.global_cell_count();
    let multipliers = MultiplierTable::new(global)
        .with_sparse_field(
            MultiplierKeyword::new(Axis::Z, Sign::Positive),
            (0..global).step_by(11).map(|g| (GlobalCellId(g), 1e-3)),
        )
        .expect("bench multipliers are valid");
    BenchCase {
        grid,
        rock,
        multipliers,
    }
}

/// 50x50x20 box (50K cells).
pub fn reference_case(seed: u64) -> BenchCase {
    case([50, 50, 20], seed)
}

/// 100x100x30 box (300K cells).
pub fn stress_case(seed: u64) -> BenchCase {
    case([100, 100, 30], seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_carries_multz_barriers() {
        let c = case([3, 3, 2], 1);
        let multz = MultiplierKeyword::new(Axis::Z, Sign::Positive);
        assert_eq!(c.grid.cell_count(), 18);
        assert!(c.multipliers.has_field(multz));
        assert_eq!(c.multipliers.get(multz, GlobalCellId(0)), 1e-3);
        assert_eq!(c.multipliers.get(multz, GlobalCellId(11)), 1e-3);
        assert_eq!(c.multipliers.get(multz, GlobalCellId(1)), 1.0);
    }
}
