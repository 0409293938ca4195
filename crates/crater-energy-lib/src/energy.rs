//! Energy estimation from crater geometry and material strength.
//!
//! The model is a static-work approximation: the energy needed to dislodge or
//! plastically deform a volume of material is taken as the material's strength
//! limit times that volume (Pa × m³ = J). It is not a kinetic or
//! fracture-mechanics model.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::{cm_to_m, diameter_cm_to_radius_m, CraterGeometry, ImpactType};
use crate::material::MaterialTable;

/// Inputs for a single energy calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyRequest {
    /// Contact surface diameter in centimeters.
    pub contact_diameter_cm: f64,
    pub crater: CraterGeometry,
    /// Penetration depth/thickness in centimeters.
    pub depth_cm: f64,
    pub impact: ImpactType,
    pub material: String,
}

/// Intermediate and final values of a calculation, all in SI units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    pub contact_radius_m: f64,
    /// Area-equivalent crater radius.
    pub crater_radius_m: f64,
    pub depth_m: f64,
    pub volume_m3: f64,
    pub strength_pa: f64,
    pub energy_j: f64,
}

/// Volume of a partial penetration: a contact-sized cylinder plus a frustum
/// narrowing from the crater mouth to the contact radius, both of height `depth_m`.
///
/// Formula: V = π·r_c²·h + (π·h/3)·(R² + R·r_c + r_c²)
pub fn normal_volume_m3(contact_radius_m: f64, crater_radius_m: f64, depth_m: f64) -> f64 {
    let cylinder = PI * contact_radius_m * contact_radius_m * depth_m;
    let frustum = (PI * depth_m / 3.0)
        * (crater_radius_m * crater_radius_m
            + crater_radius_m * contact_radius_m
            + contact_radius_m * contact_radius_m);
    cylinder + frustum
}

/// Volume of a through-penetration: crater mouth area times thickness.
pub fn clean_volume_m3(crater: &CraterGeometry, depth_m: f64) -> f64 {
    crater.mouth_area_m2() * depth_m
}

/// Validate inputs and compute every intermediate value of the energy estimate.
///
/// # Errors
///
/// Checks run in this order and the first failure is returned:
/// - [`Error::InvalidContactDiameter`] for a non-finite or non-positive contact diameter
/// - [`Error::InvalidDepth`] for a non-finite or non-positive depth
/// - [`Error::InvalidCraterDimension`] for a bad field of the active crater shape
/// - [`Error::CraterTooSmall`] when the equivalent crater radius is strictly
///   smaller than the contact radius
/// - [`Error::UnknownMaterial`] when the material is not in `table`
/// - [`Error::EnergyOverflow`] when valid but huge inputs overflow the volume or energy
pub fn compute_breakdown(
    contact_diameter_cm: f64,
    crater: &CraterGeometry,
    depth_cm: f64,
    impact: ImpactType,
    material_id: &str,
    table: &MaterialTable,
) -> Result<EnergyBreakdown> {
    if !contact_diameter_cm.is_finite() || contact_diameter_cm <= 0.0 {
        return Err(Error::InvalidContactDiameter {
            value: contact_diameter_cm,
        });
    }

    if !depth_cm.is_finite() || depth_cm <= 0.0 {
        return Err(Error::InvalidDepth {
            value: Some(depth_cm),
        });
    }

    crater.validate()?;

    let contact_radius_m = diameter_cm_to_radius_m(contact_diameter_cm);
    let crater_radius_m = crater.equivalent_radius_m();
    let depth_m = cm_to_m(depth_cm);

    if crater_radius_m < contact_radius_m {
        return Err(Error::CraterTooSmall {
            crater_radius_m,
            contact_radius_m,
        });
    }

    let volume_m3 = match impact {
        ImpactType::Normal => normal_volume_m3(contact_radius_m, crater_radius_m, depth_m),
        ImpactType::Clean => clean_volume_m3(crater, depth_m),
    };

    let strength_pa = table.strength_of(material_id)?;
    let energy_j = strength_pa * volume_m3;
    if !volume_m3.is_finite() || !energy_j.is_finite() {
        return Err(Error::EnergyOverflow {
            volume_m3,
            energy_j,
        });
    }

    debug!(
        contact_radius_m,
        crater_radius_m,
        depth_m,
        volume_m3,
        strength_pa,
        energy_j,
        impact = impact.label(),
        material = material_id,
        "computed crater energy"
    );

    Ok(EnergyBreakdown {
        contact_radius_m,
        crater_radius_m,
        depth_m,
        volume_m3,
        strength_pa,
        energy_j,
    })
}

/// Energy in joules required to produce the crater.
///
/// See [`compute_breakdown`] for validation rules.
///
/// # Examples
///
/// ```
/// use crater_energy_lib::{compute_energy, CraterGeometry, ImpactType, MaterialTable};
///
/// let crater = CraterGeometry::Circular { diameter_cm: 10.0 };
/// let joules = compute_energy(5.0, &crater, 2.0, ImpactType::Normal, "steel", MaterialTable::builtin())
///     .unwrap();
/// assert!((joules - 104_719.755).abs() < 1e-3);
/// ```
pub fn compute_energy(
    contact_diameter_cm: f64,
    crater: &CraterGeometry,
    depth_cm: f64,
    impact: ImpactType,
    material_id: &str,
    table: &MaterialTable,
) -> Result<f64> {
    compute_breakdown(
        contact_diameter_cm,
        crater,
        depth_cm,
        impact,
        material_id,
        table,
    )
    .map(|breakdown| breakdown.energy_j)
}

impl EnergyRequest {
    /// Run the calculation described by this request.
    pub fn evaluate(&self, table: &MaterialTable) -> Result<EnergyBreakdown> {
        compute_breakdown(
            self.contact_diameter_cm,
            &self.crater,
            self.depth_cm,
            self.impact,
            &self.material,
            table,
        )
    }
}
