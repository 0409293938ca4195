//! Interactive calculation session state.
//!
//! [`CalculatorSession`] owns everything a front end mutates between
//! calculations: the selected contact option, the crater inputs, the active
//! geometry mode, the material, the last successful result and the display
//! mode. Calculation and formatting stay pure; the session only decides which
//! inputs to pass and what to keep afterwards.

use serde::Serialize;
use tracing::{debug, warn};

use crate::energy::{compute_breakdown, EnergyBreakdown};
use crate::error::{Error, Result};
use crate::format::{format_energy, DisplayMode, FormattedEnergy};
use crate::geometry::{ContactOption, CraterGeometry, GeometryMode, ImpactType};
use crate::material::{MaterialTable, DEFAULT_MATERIAL};

/// Raw crater and depth inputs as entered by the user, in centimeters.
///
/// Fields are optional because the user may not have filled them in yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CraterInputs {
    pub diameter_cm: Option<f64>,
    pub width_cm: Option<f64>,
    pub height_cm: Option<f64>,
    pub depth_cm: Option<f64>,
}

/// Mutable state of one interactive session.
#[derive(Debug, Clone)]
pub struct CalculatorSession<'t> {
    table: &'t MaterialTable,
    contact: Option<ContactOption>,
    geometry_mode: GeometryMode,
    inputs: CraterInputs,
    impact: ImpactType,
    material: String,
    last_energy: Option<f64>,
    display_mode: DisplayMode,
}

impl<'t> CalculatorSession<'t> {
    /// Start a session with nothing selected, circular geometry, normal impact and
    /// the default material (or the first material in the table when the default
    /// is absent).
    pub fn new(table: &'t MaterialTable) -> Self {
        let material = if table.contains(DEFAULT_MATERIAL) {
            DEFAULT_MATERIAL.to_string()
        } else {
            table.names().into_iter().next().unwrap_or_default()
        };

        Self {
            table,
            contact: None,
            geometry_mode: GeometryMode::default(),
            inputs: CraterInputs::default(),
            impact: ImpactType::default(),
            material,
            last_energy: None,
            display_mode: DisplayMode::default(),
        }
    }

    /// Select exactly one contact option, replacing any previous selection.
    pub fn select_contact(&mut self, option: ContactOption) {
        debug!(contact = option.key(), "contact selected");
        self.contact = Some(option);
    }

    pub fn contact(&self) -> Option<ContactOption> {
        self.contact
    }

    pub fn switch_geometry(&mut self, mode: GeometryMode) {
        self.geometry_mode = mode;
    }

    pub fn geometry_mode(&self) -> GeometryMode {
        self.geometry_mode
    }

    pub fn set_crater_diameter(&mut self, diameter_cm: Option<f64>) {
        self.inputs.diameter_cm = diameter_cm;
    }

    pub fn set_crater_width(&mut self, width_cm: Option<f64>) {
        self.inputs.width_cm = width_cm;
    }

    pub fn set_crater_height(&mut self, height_cm: Option<f64>) {
        self.inputs.height_cm = height_cm;
    }

    pub fn set_depth(&mut self, depth_cm: Option<f64>) {
        self.inputs.depth_cm = depth_cm;
    }

    pub fn inputs(&self) -> CraterInputs {
        self.inputs
    }

    pub fn set_impact(&mut self, impact: ImpactType) {
        self.impact = impact;
    }

    pub fn impact(&self) -> ImpactType {
        self.impact
    }

    /// Choose the material used by subsequent calculations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMaterial`] and keeps the current material when
    /// `material_id` is not in the session's table.
    pub fn set_material(&mut self, material_id: &str) -> Result<()> {
        let material = self.table.get(material_id).ok_or_else(|| Error::UnknownMaterial {
            name: material_id.to_string(),
            suggestions: self.table.fuzzy_matches(material_id, 3),
        })?;
        self.material = material.name.clone();
        Ok(())
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn last_energy(&self) -> Option<f64> {
        self.last_energy
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Build the crater geometry for the active mode from the current inputs.
    fn crater_geometry(&self) -> Result<CraterGeometry> {
        let required = |field: &'static str, value: Option<f64>| {
            value.ok_or(Error::InvalidCraterDimension { field, value: None })
        };

        match self.geometry_mode {
            GeometryMode::Circular => Ok(CraterGeometry::Circular {
                diameter_cm: required("diameter", self.inputs.diameter_cm)?,
            }),
            GeometryMode::Elliptical => Ok(CraterGeometry::Elliptical {
                width_cm: required("width", self.inputs.width_cm)?,
                height_cm: required("height", self.inputs.height_cm)?,
            }),
        }
    }

    /// Run a calculation with the current selections.
    ///
    /// On success the energy is stored as the last result and returned with its
    /// formatted rendering. On failure the previous result and all selections
    /// are left untouched.
    ///
    /// # Errors
    ///
    /// [`Error::NoContactSelected`] when no contact option is selected, plus
    /// every error [`compute_breakdown`] can return. Missing depth or crater
    /// fields are reported as [`Error::InvalidDepth`] or
    /// [`Error::InvalidCraterDimension`] with no value.
    pub fn calculate(&mut self) -> Result<(EnergyBreakdown, FormattedEnergy)> {
        let outcome = self.try_calculate();
        match outcome {
            Ok(breakdown) => {
                self.last_energy = Some(breakdown.energy_j);
                let rendered = self.render();
                Ok((breakdown, rendered))
            }
            Err(err) => {
                warn!(error = %err, "calculation rejected");
                Err(err)
            }
        }
    }

    fn try_calculate(&self) -> Result<EnergyBreakdown> {
        let contact = self.contact.ok_or(Error::NoContactSelected)?;
        let depth_cm = self
            .inputs
            .depth_cm
            .ok_or(Error::InvalidDepth { value: None })?;
        let crater = self.crater_geometry()?;

        compute_breakdown(
            contact.diameter_cm(),
            &crater,
            depth_cm,
            self.impact,
            &self.material,
            self.table,
        )
    }

    /// Flip between Auto and Full display and re-render the stored result.
    pub fn toggle_display_mode(&mut self) -> FormattedEnergy {
        self.display_mode = self.display_mode.toggled();
        self.render()
    }

    /// Render the last result in the current display mode.
    pub fn render(&self) -> FormattedEnergy {
        format_energy(self.last_energy, self.display_mode)
    }

    /// Clear the selection, crater/depth inputs and last result.
    ///
    /// The display mode, geometry mode, impact type and material are kept.
    pub fn reset(&mut self) -> FormattedEnergy {
        self.contact = None;
        self.inputs = CraterInputs::default();
        self.last_energy = None;
        debug!("session reset");
        self.render()
    }
}
