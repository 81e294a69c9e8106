//! Directional transmissibility multipliers (`MULTX`, `MULTX-`, ...).
//!
//! A `+axis` field value at cell `c` scales the transmissibility of the
//! face between `c` and its neighbour in the increasing axis direction. A
//! `-axis` field value at `c` scales the face between `c` and its neighbour
//! in the decreasing direction. Both may be present; they multiply.

use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;
use strata_core::{Axis, ConfigError, GeologyError, GlobalCellId, Sign, ValidationError};

/// One of the six multiplier fields: an axis and a sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MultiplierKeyword {
    /// Axis of the faces the field scales.
    pub axis: Axis,
    /// Which neighbour of the keyed cell the face leads to.
    pub sign: Sign,
}

impl MultiplierKeyword {
    /// All six keywords in `MULTX, MULTX-, MULTY, MULTY-, MULTZ, MULTZ-` order.
    pub const ALL: [MultiplierKeyword; 6] = [
        Self::new(Axis::X, Sign::Positive),
        Self::new(Axis::X, Sign::Negative),
        Self::new(Axis::Y, Sign::Positive),
        Self::new(Axis::Y, Sign::Negative),
        Self::new(Axis::Z, Sign::Positive),
        Self::new(Axis::Z, Sign::Negative),
    ];

    /// Keyword for `axis` and `sign`.
    pub const fn new(axis: Axis, sign: Sign) -> Self {
        Self { axis, sign }
    }

    /// Deck name of the field.
    pub fn name(self) -> &'static str {
        match (self.axis, self.sign) {
            (Axis::X, Sign::Positive) => "MULTX",
            (Axis::X, Sign::Negative) => "MULTX-",
            (Axis::Y, Sign::Positive) => "MULTY",
            (Axis::Y, Sign::Negative) => "MULTY-",
            (Axis::Z, Sign::Positive) => "MULTZ",
            (Axis::Z, Sign::Negative) => "MULTZ-",
        }
    }

    fn slot(self) -> usize {
        2 * self.axis.index()
            + match self.sign {
                Sign::Positive => 0,
                Sign::Negative => 1,
            }
    }
}

impl fmt::Display for MultiplierKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MultiplierKeyword {
    type Err = ConfigError;

    /// Parse a deck name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownMultiplier { name: s.to_string() })
    }
}

/// Six dense multiplier arrays indexed by global cell, default 1.0.
///
/// Absent fields cost nothing and read as all-ones; lookups are a single
/// indexed read.
///
/// # Examples
///
/// ```
/// use strata_core::{Axis, GlobalCellId};
/// use strata_geology::{MultiplierKeyword, MultiplierTable};
///
/// let multx: MultiplierKeyword = "MULTX".parse().unwrap();
/// let table = MultiplierTable::new(4)
///     .with_sparse_field(multx, [(GlobalCellId(1), 0.5)])
///     .unwrap();
/// assert_eq!(table.get(multx, GlobalCellId(1)), 0.5);
/// assert_eq!(table.get(multx, GlobalCellId(2)), 1.0);
/// assert_eq!(table.face_multiplier(Axis::X, GlobalCellId(1), GlobalCellId(2)), 0.5);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiplierTable {
    global_cell_count: usize,
    fields: [Option<Vec<f64>>; 6],
}

impl MultiplierTable {
    /// A table with no fields: every lookup returns 1.0.
    pub fn new(global_cell_count: usize) -> Self {
        Self {
            global_cell_count,
            fields: Default::default(),
        }
    }

    /// Install a dense field with one value per global cell.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MultiplierLengthMismatch`] if `values.len()` is not
    ///   the global cell count
    /// - [`ConfigError::DuplicateMultiplier`] if the field is already present
    /// - [`ValidationError::InvalidMultiplier`] for a zero, negative or
    ///   non-finite value
    pub fn with_field(
        mut self,
        keyword: MultiplierKeyword,
        values: Vec<f64>,
    ) -> Result<Self, GeologyError> {
        if values.len() != self.global_cell_count {
            return Err(ConfigError::MultiplierLengthMismatch {
                keyword: keyword.name(),
                expected: self.global_cell_count,
                actual: values.len(),
            }
            .into());
        }
        for (g, &value) in values.iter().enumerate() {
            check_value(keyword, GlobalCellId(g), value)?;
        }
        self.install(keyword, values)?;
        Ok(self)
    }

    /// Install a field from sparse `(global cell, value)` entries; all other
    /// cells read 1.0. A cell named twice keeps its last value.
    ///
    /// # Errors
    ///
    /// As [`with_field`](Self::with_field), plus
    /// [`ConfigError::MultiplierCellOutOfRange`] for an entry beyond the
    /// global cell count.
    pub fn with_sparse_field(
        mut self,
        keyword: MultiplierKeyword,
        entries: impl IntoIterator<Item = (GlobalCellId, f64)>,
    ) -> Result<Self, GeologyError> {
        let mut values = vec![1.0; self.global_cell_count];
        for (global, value) in entries {
            let slot = values
                .get_mut(global.index())
                .ok_or(ConfigError::MultiplierCellOutOfRange {
                    keyword: keyword.name(),
                    global,
                    global_cell_count: self.global_cell_count,
                })?;
            check_value(keyword, global, value)?;
            *slot = value;
        }
        self.install(keyword, values)?;
        Ok(self)
    }

    /// Build from up to six fields keyed by deck name.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownMultiplier`] for an unrecognised name,
    /// [`ConfigError::DuplicateMultiplier`] if two names resolve to the
    /// same keyword, and anything [`with_field`](Self::with_field) reports.
    pub fn from_named_fields(
        global_cell_count: usize,
        fields: &IndexMap<String, Vec<f64>>,
    ) -> Result<Self, GeologyError> {
        fields
            .iter()
            .try_fold(Self::new(global_cell_count), |table, (name, values)| {
                let keyword: MultiplierKeyword = name.parse()?;
                table.with_field(keyword, values.clone())
            })
    }

    fn install(&mut self, keyword: MultiplierKeyword, values: Vec<f64>) -> Result<(), ConfigError> {
        let slot = &mut self.fields[keyword.slot()];
        if slot.is_some() {
            return Err(ConfigError::DuplicateMultiplier {
                keyword: keyword.name(),
            });
        }
        log::trace!(
            "installed multiplier field {keyword} over {} global cells",
            values.len()
        );
        *slot = Some(values);
        Ok(())
    }

    /// Number of global cells the table covers.
    pub fn global_cell_count(&self) -> usize {
        self.global_cell_count
    }

    /// `true` if `keyword` was supplied.
    pub fn has_field(&self, keyword: MultiplierKeyword) -> bool {
        self.fields[keyword.slot()].is_some()
    }

    /// `true` if no field was supplied.
    pub fn is_default(&self) -> bool {
        self.fields.iter().all(Option::is_none)
    }

    /// Multiplier value of `keyword` at `global`; 1.0 if the field is absent.
    ///
    /// # Panics
    ///
    /// Panics if the field is present and `global` is out of range.
    #[inline]
    pub fn get(&self, keyword: MultiplierKeyword, global: GlobalCellId) -> f64 {
        self.fields[keyword.slot()]
            .as_ref()
            .map_or(1.0, |v| v[global.index()])
    }

    /// Combined multiplier for a face along `axis` between the cell on its
    /// low side (`lower`) and the cell on its high side (`upper`):
    /// `+axis(lower) * -axis(upper)`.
    #[inline]
    pub fn face_multiplier(&self, axis: Axis, lower: GlobalCellId, upper: GlobalCellId) -> f64 {
        self.get(MultiplierKeyword::new(axis, Sign::Positive), lower)
            * self.get(MultiplierKeyword::new(axis, Sign::Negative), upper)
    }
}

fn check_value(
    keyword: MultiplierKeyword,
    global: GlobalCellId,
    value: f64,
) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidMultiplier {
            keyword: keyword.name(),
            global,
            value,
        })
    }
}
