//! Rock properties: permeability, porosity and net-to-gross per cell.

use strata_core::{Axis, CellId, ConfigError};
use strata_grid::GridView;

/// Read-only per-cell rock properties in compressed numbering.
///
/// # Thread Safety
///
/// `Sync` is required for the same reason as on
/// [`GridView`]: derivation scatters over a thread pool.
pub trait RockPropertyView: Send + Sync {
    /// Number of cells described.
    fn cell_count(&self) -> usize;

    /// Permeability component along `axis`.
    fn permeability(&self, cell: CellId, axis: Axis) -> f64;

    /// Porosity.
    fn porosity(&self, cell: CellId) -> f64;

    /// Net-to-gross ratio. Defaults to 1.0.
    fn ntg(&self, cell: CellId) -> f64 {
        let _ = cell;
        1.0
    }
}

/// Rock-property fields as authored, one entry per *global* cell.
///
/// `PERMX` and `PORO` are required. `PERMY` and `PERMZ` fall back to
/// `PERMX` when absent; `NTG` falls back to 1.0.
///
/// # Examples
///
/// ```
/// use strata_core::{Axis, CellId};
/// use strata_geology::{RockFields, RockProperties, RockPropertyView};
/// use strata_grid::CartesianGrid;
///
/// let grid = CartesianGrid::uniform([2, 2, 2], [1.0, 1.0, 1.0]).unwrap();
/// let fields = RockFields::new()
///     .permx(vec![100.0; 8])
///     .poro(vec![0.3; 8])
///     .ntg(vec![0.5; 8]);
/// let rock = RockProperties::from_fields(&grid, &fields).unwrap();
/// assert_eq!(rock.permeability(CellId(3), Axis::Z), 100.0);
/// assert_eq!(rock.ntg(CellId(3)), 0.5);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RockFields {
    permx: Option<Vec<f64>>,
    permy: Option<Vec<f64>>,
    permz: Option<Vec<f64>>,
    poro: Option<Vec<f64>>,
    ntg: Option<Vec<f64>>,
}

impl RockFields {
    /// No fields supplied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `PERMX`.
    pub fn permx(mut self, v: Vec<f64>) -> Self {
        self.permx = Some(v);
        self
    }

    /// Set `PERMY`.
    pub fn permy(mut self, v: Vec<f64>) -> Self {
        self.permy = Some(v);
        self
    }

    /// Set `PERMZ`.
    pub fn permz(mut self, v: Vec<f64>) -> Self {
        self.permz = Some(v);
        self
    }

    /// Set `PORO`.
    pub fn poro(mut self, v: Vec<f64>) -> Self {
        self.poro = Some(v);
        self
    }

    /// Set `NTG`.
    pub fn ntg(mut self, v: Vec<f64>) -> Self {
        self.ntg = Some(v);
        self
    }
}

/// Array-backed [`RockPropertyView`] in compressed numbering.
#[derive(Clone, Debug, PartialEq)]
pub struct RockProperties {
    perm: Vec<[f64; 3]>,
    poro: Vec<f64>,
    ntg: Option<Vec<f64>>,
}

impl RockProperties {
    /// Build from compressed per-cell arrays.
    ///
    /// Returns `Err(ConfigError::FieldLengthMismatch)` if `poro` or `ntg`
    /// does not have one entry per permeability triple.
    pub fn new(
        perm: Vec<[f64; 3]>,
        poro: Vec<f64>,
        ntg: Option<Vec<f64>>,
    ) -> Result<Self, ConfigError> {
        let n = perm.len();
        check_len("PORO", n, poro.len())?;
        if let Some(ntg) = &ntg {
            check_len("NTG", n, ntg.len())?;
        }
        Ok(Self { perm, poro, ntg })
    }

    /// Homogeneous isotropic rock.
    pub fn uniform(cell_count: usize, perm: f64, poro: f64) -> Self {
        Self {
            perm: vec![[perm; 3]; cell_count],
            poro: vec![poro; cell_count],
            ntg: None,
        }
    }

    /// Replace NTG with a single value for every cell.
    pub fn with_uniform_ntg(mut self, ntg: f64) -> Self {
        self.ntg = Some(vec![ntg; self.perm.len()]);
        self
    }

    /// Compress global fields through the grid's global index mapping.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingRockField`] if `PERMX` or `PORO` is absent
    /// - [`ConfigError::FieldLengthMismatch`] if a field does not have one
    ///   entry per global cell
    pub fn from_fields(grid: &dyn GridView, fields: &RockFields) -> Result<Self, ConfigError> {
        let global = grid.global_cell_count();
        let permx = required("PERMX", fields.permx.as_deref(), global)?;
        let poro = required("PORO", fields.poro.as_deref(), global)?;
        let permy = optional("PERMY", fields.permy.as_deref(), global)?.unwrap_or(permx);
        let permz = optional("PERMZ", fields.permz.as_deref(), global)?.unwrap_or(permx);
        let ntg = optional("NTG", fields.ntg.as_deref(), global)?;

        let cells = 0..grid.cell_count();
        let gather = |field: &[f64]| -> Vec<f64> {
            cells
                .clone()
                .map(|c| field[grid.global_index(CellId(c)).index()])
                .collect()
        };
        let (kx, ky, kz) = (gather(permx), gather(permy), gather(permz));
        let perm = kx
            .into_iter()
            .zip(ky)
            .zip(kz)
            .map(|((x, y), z)| [x, y, z])
            .collect();
        Ok(Self {
            perm,
            poro: gather(poro),
            ntg: ntg.map(gather),
        })
    }

    /// `true` if an NTG field is present.
    pub fn has_ntg(&self) -> bool {
        self.ntg.is_some()
    }
}

impl RockPropertyView for RockProperties {
    fn cell_count(&self) -> usize {
        self.perm.len()
    }

    fn permeability(&self, cell: CellId, axis: Axis) -> f64 {
        self.perm[cell.index()][axis.index()]
    }

    fn porosity(&self, cell: CellId) -> f64 {
        self.poro[cell.index()]
    }

    fn ntg(&self, cell: CellId) -> f64 {
        self.ntg.as_ref().map_or(1.0, |v| v[cell.index()])
    }
}

fn check_len(name: &'static str, expected: usize, actual: usize) -> Result<(), ConfigError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ConfigError::FieldLengthMismatch {
            name,
            expected,
            actual,
        })
    }
}

fn required<'f>(
    name: &'static str,
    field: Option<&'f [f64]>,
    global: usize,
) -> Result<&'f [f64], ConfigError> {
    let field = field.ok_or(ConfigError::MissingRockField { name })?;
    check_len(name, global, field.len())?;
    Ok(field)
}

fn optional<'f>(
    name: &'static str,
    field: Option<&'f [f64]>,
    global: usize,
) -> Result<Option<&'f [f64]>, ConfigError> {
    match field {
        Some(f) => required(name, Some(f), global).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_grid::CartesianGrid;

    fn grid_with_inactive_cell() -> CartesianGrid {
        CartesianGrid::builder()
            .dims(2, 2, 1)
            .dxv(vec![1.0, 1.0])
            .dyv(vec![1.0, 1.0])
            .dzv(vec![1.0])
            .actnum(vec![true, false, true, true])
            .build()
            .unwrap()
    }

    #[test]
    fn permy_and_permz_default_to_permx() {
        let grid = CartesianGrid::uniform([2, 1, 1], [1.0; 3]).unwrap();
        let fields = RockFields::new().permx(vec![5.0, 7.0]).poro(vec![0.2, 0.25]);
        let rock = RockProperties::from_fields(&grid, &fields).unwrap();
        for axis in Axis::ALL {
            assert_eq!(rock.permeability(CellId(1), axis), 7.0);
        }
        assert_eq!(rock.porosity(CellId(0)), 0.2);
        assert_eq!(rock.ntg(CellId(0)), 1.0);
        assert!(!rock.has_ntg());
    }

    #[test]
    fn fields_are_compressed_through_global_map() {
        let grid = grid_with_inactive_cell();
        let fields = RockFields::new()
            .permx(vec![1.0, 2.0, 3.0, 4.0])
            .permz(vec![10.0, 20.0, 30.0, 40.0])
            .poro(vec![0.1, 0.2, 0.3, 0.4])
            .ntg(vec![0.9, 0.8, 0.7, 0.6]);
        let rock = RockProperties::from_fields(&grid, &fields).unwrap();
        assert_eq!(rock.cell_count(), 3);
        // Compressed cell 1 is global cell 2.
        assert_eq!(rock.permeability(CellId(1), Axis::X), 3.0);
        assert_eq!(rock.permeability(CellId(1), Axis::Y), 3.0);
        assert_eq!(rock.permeability(CellId(1), Axis::Z), 30.0);
        assert_eq!(rock.porosity(CellId(2)), 0.4);
        assert_eq!(rock.ntg(CellId(1)), 0.7);
    }

    #[test]
    fn missing_required_fields() {
        let grid = CartesianGrid::uniform([2, 1, 1], [1.0; 3]).unwrap();
        let err = RockProperties::from_fields(&grid, &RockFields::new().poro(vec![0.2; 2]))
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingRockField { name: "PERMX" });
        let err = RockProperties::from_fields(&grid, &RockFields::new().permx(vec![1.0; 2]))
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingRockField { name: "PORO" });
    }

    #[test]
    fn wrong_field_length() {
        let grid = grid_with_inactive_cell();
        // Fields are global-sized: 4 entries, not 3.
        let fields = RockFields::new().permx(vec![1.0; 3]).poro(vec![0.2; 4]);
        assert_eq!(
            RockProperties::from_fields(&grid, &fields).unwrap_err(),
            ConfigError::FieldLengthMismatch {
                name: "PERMX",
                expected: 4,
                actual: 3,
            }
        );
        let fields = RockFields::new()
            .permx(vec![1.0; 4])
            .poro(vec![0.2; 4])
            .ntg(vec![1.0; 5]);
        assert!(matches!(
            RockProperties::from_fields(&grid, &fields),
            Err(ConfigError::FieldLengthMismatch { name: "NTG", .. })
        ));
    }

    #[test]
    fn compressed_constructor_checks_lengths() {
        assert!(RockProperties::new(vec![[1.0; 3]; 2], vec![0.1; 2], None).is_ok());
        assert_eq!(
            RockProperties::new(vec![[1.0; 3]; 2], vec![0.1; 3], None).unwrap_err(),
            ConfigError::FieldLengthMismatch {
                name: "PORO",
                expected: 2,
                actual: 3,
            }
        );
    }

    #[test]
    fn uniform_ntg_override() {
        let rock = RockProperties::uniform(3, 1.0, 0.3).with_uniform_ntg(0.5);
        assert!(rock.has_ntg());
        assert_eq!(rock.ntg(CellId(2)), 0.5);
    }
}
