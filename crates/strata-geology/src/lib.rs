//! Derived reservoir geology: pore volumes and face transmissibilities.
//!
//! Given a [`GridView`](strata_grid::GridView), a [`RockPropertyView`] and
//! an optional [`MultiplierTable`], [`DerivedGeology`] computes
//!
//! - `pore_volume[cell] = bulk_volume * porosity * ntg`
//! - `transmissibility[face]` by the two-point flux approximation: the
//!   harmonic combination of the two cells' half-transmissibilities, NTG
//!   applied to horizontal faces only, scaled by the directional
//!   multipliers of the face's axis.
//!
//! # Pipeline (per face)
//!
//! 1. [`half_transmissibility`]: `K_axis * area / distance`, once per side
//! 2. [`TransmissibilityAssembler`]: NTG, harmonic mean, multipliers
//!
//! Cells and faces are independent, so both passes are scattered across a
//! rayon pool; see [`GeologyConfig`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod assembler;
pub mod config;
pub mod geology;
pub mod half_trans;
pub mod multiplier;
pub mod pore_volume;
pub mod rock;

pub use assembler::{harmonic_mean, TransmissibilityAssembler};
pub use config::{GeologyConfig, ParallelStrategy};
pub use geology::DerivedGeology;
pub use half_trans::half_transmissibility;
pub use multiplier::{MultiplierKeyword, MultiplierTable};
pub use pore_volume::pore_volume;
pub use rock::{RockFields, RockProperties, RockPropertyView};
