//! Calculate command handler for one-shot energy estimates.

use anyhow::{Context, Result};
use clap::Args;

use crater_energy_lib::{
    format_energy, ContactOption, CraterGeometry, DisplayMode, EnergyRequest, Error, ImpactType,
    MaterialTable,
};

use crate::output::{CalculationReport, OutputFormat};

/// Arguments for the calculate command.
#[derive(Debug, Clone, Args)]
pub struct CalculateArgs {
    /// Contact option key (e.g. `fist`) or its diameter in cm (e.g. `8`).
    #[arg(long)]
    pub contact: String,
    /// Circular crater diameter in cm.
    #[arg(
        long,
        allow_negative_numbers = true,
        conflicts_with_all = ["crater_width", "crater_height"]
    )]
    pub crater_diameter: Option<f64>,
    /// Elliptical crater width in cm.
    #[arg(long, allow_negative_numbers = true)]
    pub crater_width: Option<f64>,
    /// Elliptical crater height in cm.
    #[arg(long, allow_negative_numbers = true)]
    pub crater_height: Option<f64>,
    /// Penetration depth/thickness in cm.
    #[arg(long, allow_negative_numbers = true)]
    pub depth: f64,
    /// Penetration model: `normal` (partial) or `clean` (through).
    #[arg(long, default_value = "normal")]
    pub impact: ImpactType,
    /// Material identifier (see the `materials` command).
    #[arg(long, default_value = crater_energy_lib::material::DEFAULT_MATERIAL)]
    pub material: String,
    /// Energy display: `auto` (J/kJ/MJ) or `full` (joules).
    #[arg(long, default_value = "auto")]
    pub display: DisplayMode,
}

impl CalculateArgs {
    /// Crater geometry implied by the provided dimension flags.
    ///
    /// A diameter selects circular mode; otherwise width and height are both required.
    pub fn crater(&self) -> std::result::Result<CraterGeometry, Error> {
        if let Some(diameter_cm) = self.crater_diameter {
            return Ok(CraterGeometry::Circular { diameter_cm });
        }

        match (self.crater_width, self.crater_height) {
            (None, None) => Err(Error::InvalidCraterDimension {
                field: "diameter",
                value: None,
            }),
            (None, Some(_)) => Err(Error::InvalidCraterDimension {
                field: "width",
                value: None,
            }),
            (Some(_), None) => Err(Error::InvalidCraterDimension {
                field: "height",
                value: None,
            }),
            (Some(width_cm), Some(height_cm)) => Ok(CraterGeometry::Elliptical {
                width_cm,
                height_cm,
            }),
        }
    }
}

/// Handle the calculate subcommand.
pub fn handle_calculate(
    table: &MaterialTable,
    args: &CalculateArgs,
    format: OutputFormat,
) -> Result<()> {
    let contact: ContactOption = args.contact.parse().context("invalid --contact")?;
    let crater = args.crater().context("invalid crater dimensions")?;

    let request = EnergyRequest {
        contact_diameter_cm: contact.diameter_cm(),
        crater,
        depth_cm: args.depth,
        impact: args.impact,
        material: args.material.clone(),
    };
    let breakdown = request
        .evaluate(table)
        .context("energy calculation failed")?;

    let material = table
        .get(&args.material)
        .map(|m| m.name.clone())
        .unwrap_or_else(|| args.material.clone());

    let report = CalculationReport {
        contact,
        contact_diameter_cm: request.contact_diameter_cm,
        crater: request.crater,
        depth_cm: request.depth_cm,
        impact: request.impact,
        material,
        display_mode: args.display,
        energy: format_energy(Some(breakdown.energy_j), args.display),
        breakdown,
    };

    format.render_calculation(&report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CalculateArgs {
        CalculateArgs {
            contact: "pipe".to_string(),
            crater_diameter: None,
            crater_width: None,
            crater_height: None,
            depth: 2.0,
            impact: ImpactType::Normal,
            material: "steel".to_string(),
            display: DisplayMode::Auto,
        }
    }

    #[test]
    fn diameter_selects_circular_geometry() {
        let mut a = args();
        a.crater_diameter = Some(10.0);
        assert_eq!(
            a.crater().unwrap(),
            CraterGeometry::Circular { diameter_cm: 10.0 }
        );
    }

    #[test]
    fn width_without_height_is_rejected() {
        let mut a = args();
        a.crater_width = Some(10.0);
        assert!(matches!(
            a.crater(),
            Err(Error::InvalidCraterDimension {
                field: "height",
                value: None
            })
        ));
    }

    #[test]
    fn no_crater_flags_reports_missing_diameter() {
        assert!(matches!(
            args().crater(),
            Err(Error::InvalidCraterDimension {
                field: "diameter",
                ..
            })
        ));
    }
}
