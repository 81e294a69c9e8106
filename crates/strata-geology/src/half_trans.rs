//! One-sided (half) transmissibility of a face.

use strata_core::axis::{dot, sub};
use strata_core::{FaceId, ValidationError};
use strata_grid::{FaceSide, GridView};

use crate::rock::RockPropertyView;

/// Half-transmissibility of `face` seen from the cell on `side`:
///
/// ```text
/// h = K_axis(cell) * area / |n · (face_centroid - cell_centroid)|
/// ```
///
/// `axis` is the face's dominant axis. The result is strictly positive.
///
/// # Errors
///
/// - [`ValidationError::MissingCell`] if `side` has no cell (boundary face)
/// - [`ValidationError::NonFinite`] if permeability, area or distance is
///   NaN or infinite
/// - [`ValidationError::NonPositivePermeability`] if `K_axis <= 0`
/// - [`ValidationError::DegenerateFaceArea`] if `area <= 0`
/// - [`ValidationError::DegenerateFaceDistance`] if the cell centroid lies
///   on the face plane
pub fn half_transmissibility(
    grid: &dyn GridView,
    rock: &dyn RockPropertyView,
    face: FaceId,
    side: FaceSide,
) -> Result<f64, ValidationError> {
    let cell = grid
        .face_cells(face)
        .cell(side)
        .ok_or(ValidationError::MissingCell { face })?;
    let axis = grid.face_axis(face);

    let perm = rock.permeability(cell, axis);
    finite("permeability", cell.index(), perm)?;
    if perm <= 0.0 {
        return Err(ValidationError::NonPositivePermeability {
            cell,
            axis,
            value: perm,
        });
    }

    let area = grid.face_area(face);
    finite("face area", face.index(), area)?;
    if area <= 0.0 {
        return Err(ValidationError::DegenerateFaceArea { face, area });
    }

    let offset = sub(&grid.face_centroid(face), &grid.cell_centroid(cell));
    let distance = dot(&grid.face_normal(face), &offset).abs();
    finite("face distance", face.index(), distance)?;
    if distance <= 0.0 {
        return Err(ValidationError::DegenerateFaceDistance {
            face,
            cell,
            distance,
        });
    }

    Ok(perm * area / distance)
}

pub(crate) fn finite(what: &'static str, index: usize, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { what, index })
    }
}
