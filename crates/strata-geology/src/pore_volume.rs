//! Per-cell pore volume.

use strata_core::{CellId, ValidationError};
use strata_grid::GridView;

use crate::half_trans::finite;
use crate::rock::RockPropertyView;

/// `bulk_volume * porosity * ntg` of `cell`.
///
/// Zero porosity and zero NTG are accepted and give a zero pore volume;
/// only negative values are rejected. A zero-volume cell still counts as
/// active and is not an error.
///
/// # Errors
///
/// - [`ValidationError::NonFinite`] if any factor is NaN or infinite
/// - [`ValidationError::NonPositiveVolume`] if the bulk volume is `<= 0`
/// - [`ValidationError::NegativePorosity`], [`ValidationError::NegativeNtg`]
pub fn pore_volume(
    grid: &dyn GridView,
    rock: &dyn RockPropertyView,
    cell: CellId,
) -> Result<f64, ValidationError> {
    let i = cell.index();

    let bulk = grid.cell_volume(cell);
    finite("bulk volume", i, bulk)?;
    if bulk <= 0.0 {
        return Err(ValidationError::NonPositiveVolume { cell, value: bulk });
    }

    let poro = rock.porosity(cell);
    finite("porosity", i, poro)?;
    if poro < 0.0 {
        return Err(ValidationError::NegativePorosity { cell, value: poro });
    }

    let ntg = rock.ntg(cell);
    finite("net-to-gross", i, ntg)?;
    if ntg < 0.0 {
        return Err(ValidationError::NegativeNtg { cell, value: ntg });
    }

    Ok(bulk * poro * ntg)
}
