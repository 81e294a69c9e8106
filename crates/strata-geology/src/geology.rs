//! The derivation facade.

use rayon::prelude::*;
use strata_core::{CellId, ConfigError, FaceId, GeologyError, ValidationError};
use strata_grid::GridView;

use crate::assembler::TransmissibilityAssembler;
use crate::config::GeologyConfig;
use crate::multiplier::MultiplierTable;
use crate::pore_volume::pore_volume;
use crate::rock::RockPropertyView;

/// Pore volumes and transmissibilities for one grid and property snapshot.
///
/// Built in a single pass by [`new`](Self::new) or
/// [`with_config`](Self::with_config). The inputs are only borrowed for the
/// duration of the call; the result owns its arrays and is immutable.
///
/// # Examples
///
/// ```
/// use strata_geology::{DerivedGeology, RockProperties};
/// use strata_grid::CartesianGrid;
///
/// let grid = CartesianGrid::uniform([2, 1, 1], [1.0, 1.0, 1.0]).unwrap();
/// let rock = RockProperties::uniform(2, 1.0, 0.25);
/// let geo = DerivedGeology::new(&grid, &rock, None).unwrap();
/// assert_eq!(geo.pore_volume(), &[0.25, 0.25]);
/// // Interior face between the two cubes: halves 2 and 2.
/// assert_eq!(geo.transmissibility()[1], 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedGeology {
    pore_volume: Vec<f64>,
    transmissibility: Vec<f64>,
}

impl DerivedGeology {
    /// Derive with the default [`GeologyConfig`].
    ///
    /// `multipliers: None` means every multiplier is 1.0.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::CellCountMismatch`] if `rock` and `grid` disagree on
    ///   the number of cells
    /// - [`ConfigError::MultiplierGridMismatch`] if the table was built for a
    ///   different global cell count
    /// - the first [`ValidationError`] in cell order, then in face order
    pub fn new(
        grid: &dyn GridView,
        rock: &dyn RockPropertyView,
        multipliers: Option<&MultiplierTable>,
    ) -> Result<Self, GeologyError> {
        Self::with_config(grid, rock, multipliers, &GeologyConfig::default())
    }

    /// Derive with explicit execution settings.
    ///
    /// # Errors
    ///
    /// As [`new`](Self::new), plus [`ConfigError::InvalidParallelConfig`].
    pub fn with_config(
        grid: &dyn GridView,
        rock: &dyn RockPropertyView,
        multipliers: Option<&MultiplierTable>,
        config: &GeologyConfig,
    ) -> Result<Self, GeologyError> {
        config.validate()?;
        if rock.cell_count() != grid.cell_count() {
            return Err(ConfigError::CellCountMismatch {
                grid: grid.cell_count(),
                rock: rock.cell_count(),
            }
            .into());
        }
        if let Some(table) = multipliers {
            if table.global_cell_count() != grid.global_cell_count() {
                return Err(ConfigError::MultiplierGridMismatch {
                    table: table.global_cell_count(),
                    grid: grid.global_cell_count(),
                }
                .into());
            }
        }

        let cell_count = grid.cell_count();
        let face_count = grid.face_count();

        let volumes = scatter(cell_count, config.runs_parallel(cell_count), |c| {
            pore_volume(grid, rock, CellId(c))
        })?;

        let assembler = TransmissibilityAssembler::new(grid, rock, multipliers);
        let transmissibility = scatter(face_count, config.runs_parallel(face_count), |f| {
            assembler.assemble(FaceId(f))
        })?;

        let mut interior = 0usize;
        let mut zero_interior = 0usize;
        for (f, &t) in transmissibility.iter().enumerate() {
            if !grid.is_boundary_face(FaceId(f)) {
                interior += 1;
                if t == 0.0 {
                    zero_interior += 1;
                }
            }
        }
        if zero_interior > 0 {
            log::warn!(
                "{zero_interior} of {interior} interior faces have zero transmissibility"
            );
        }
        log::debug!(
            "derived geology: {cell_count} cells, {face_count} faces ({interior} interior), \
             strategy {:?}, multipliers {}",
            config.strategy,
            if multipliers.is_some_and(|m| !m.is_default()) {
                "present"
            } else {
                "default"
            },
        );

        Ok(Self {
            pore_volume: volumes,
            transmissibility,
        })
    }

    /// Pore volume per cell, indexed by [`CellId`].
    pub fn pore_volume(&self) -> &[f64] {
        &self.pore_volume
    }

    /// Transmissibility per face, indexed by [`FaceId`]. Boundary faces are 0.
    pub fn transmissibility(&self) -> &[f64] {
        &self.transmissibility
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.pore_volume.len()
    }

    /// Number of faces.
    pub fn face_count(&self) -> usize {
        self.transmissibility.len()
    }

    /// Sum of all pore volumes, accumulated in cell order.
    pub fn total_pore_volume(&self) -> f64 {
        self.pore_volume.iter().sum()
    }

    /// Take ownership of `(pore_volume, transmissibility)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.pore_volume, self.transmissibility)
    }
}

/// Evaluate `f` over `0..len`, in parallel or not, and collect in index
/// order. The reported error is the lowest-index one either way.
fn scatter<F>(len: usize, parallel: bool, f: F) -> Result<Vec<f64>, ValidationError>
where
    F: Fn(usize) -> Result<f64, ValidationError> + Send + Sync,
{
    if parallel {
        let results: Vec<Result<f64, ValidationError>> = (0..len).into_par_iter().map(f).collect();
        results.into_iter().collect()
    } else {
        (0..len).map(f).collect()
    }
}
