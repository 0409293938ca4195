//! Crater energy library entry points.
//!
//! This crate estimates the mechanical energy needed to punch a crater of a
//! given shape into a material, using a static strength × volume model, and
//! renders the result in adaptive units. Front ends (the CLI) should only
//! depend on the items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod energy;
pub mod error;
pub mod format;
pub mod geometry;
pub mod material;
pub mod session;

pub use energy::{
    clean_volume_m3, compute_breakdown, compute_energy, normal_volume_m3, EnergyBreakdown,
    EnergyRequest,
};
pub use error::{Error, Result};
pub use format::{format_energy, DisplayMode, EnergyUnit, FormattedEnergy};
pub use geometry::{ContactGroup, ContactOption, CraterGeometry, GeometryMode, ImpactType};
pub use material::{Material, MaterialTable};
pub use session::{CalculatorSession, CraterInputs};
