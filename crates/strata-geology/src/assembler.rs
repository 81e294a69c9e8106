//! Final per-face transmissibility: NTG, harmonic combination, multipliers.

use strata_core::{CellId, FaceId, ValidationError};
use strata_grid::{FaceSide, GridView};

use crate::half_trans::{finite, half_transmissibility};
use crate::multiplier::MultiplierTable;
use crate::rock::RockPropertyView;

/// Harmonic combination `1 / (1/a + 1/b)` of two half-transmissibilities.
///
/// Either half being zero yields zero rather than a division by zero. The
/// reciprocal form stays finite where `a * b` would overflow and gives the
/// same bits for `(a, b)` and `(b, a)`.
///
/// ```
/// use strata_geology::harmonic_mean;
///
/// assert!((harmonic_mean(30.0, 15.0) - 10.0).abs() < 1e-12);
/// assert_eq!(harmonic_mean(0.0, 15.0), 0.0);
/// ```
#[inline]
pub fn harmonic_mean(a: f64, b: f64) -> f64 {
    if a == 0.0 || b == 0.0 {
        0.0
    } else {
        1.0 / (a.recip() + b.recip())
    }
}

/// Combines half-transmissibilities into the final value of each face.
///
/// Borrowed inputs only; [`assemble`](Self::assemble) is a pure function of
/// the face and may be called from any thread.
#[derive(Clone, Copy)]
pub struct TransmissibilityAssembler<'a> {
    grid: &'a dyn GridView,
    rock: &'a dyn RockPropertyView,
    multipliers: Option<&'a MultiplierTable>,
}

impl<'a> TransmissibilityAssembler<'a> {
    /// Assemble over `grid` and `rock`. `None` multipliers mean all ones.
    pub fn new(
        grid: &'a dyn GridView,
        rock: &'a dyn RockPropertyView,
        multipliers: Option<&'a MultiplierTable>,
    ) -> Self {
        Self {
            grid,
            rock,
            multipliers,
        }
    }

    /// Transmissibility of `face`.
    ///
    /// 1. Boundary faces are 0.
    /// 2. Half-transmissibilities of both sides; on X/Y faces each is scaled
    ///    by its own cell's NTG.
    /// 3. Harmonic combination; a zero half gives 0.
    /// 4. Scaled by `+axis` at the low-side cell and `-axis` at the
    ///    high-side cell, looked up by global index. The low side is the
    ///    inside cell when the normal points along `+axis`, else the
    ///    outside cell.
    ///
    /// # Errors
    ///
    /// Anything [`half_transmissibility`] reports, plus
    /// [`ValidationError::NegativeNtg`] or [`ValidationError::NonFinite`]
    /// for the NTG of either cell of a horizontal face.
    pub fn assemble(&self, face: FaceId) -> Result<f64, ValidationError> {
        let Some((inside, outside)) = self.grid.face_cells(face).pair() else {
            return Ok(0.0);
        };
        let axis = self.grid.face_axis(face);

        let mut h_in = half_transmissibility(self.grid, self.rock, face, FaceSide::Inside)?;
        let mut h_out = half_transmissibility(self.grid, self.rock, face, FaceSide::Outside)?;
        if axis.is_horizontal() {
            h_in *= self.ntg(inside)?;
            h_out *= self.ntg(outside)?;
        }

        let mut trans = harmonic_mean(h_in, h_out);

        if let Some(table) = self.multipliers {
            let (lower, upper) = if self.grid.face_normal(face)[axis.index()] >= 0.0 {
                (inside, outside)
            } else {
                (outside, inside)
            };
            trans *= table.face_multiplier(
                axis,
                self.grid.global_index(lower),
                self.grid.global_index(upper),
            );
        }
        Ok(trans)
    }

    fn ntg(&self, cell: CellId) -> Result<f64, ValidationError> {
        let ntg = self.rock.ntg(cell);
        finite("net-to-gross", cell.index(), ntg)?;
        if ntg < 0.0 {
            return Err(ValidationError::NegativeNtg { cell, value: ntg });
        }
        Ok(ntg)
    }
}
