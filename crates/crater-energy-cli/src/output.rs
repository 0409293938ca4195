//! Output formatting for calculation results and catalogs.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use crater_energy_lib::format::format_number;
use crater_energy_lib::{
    ContactGroup, ContactOption, CraterGeometry, DisplayMode, EnergyBreakdown, FormattedEnergy,
    ImpactType, Material,
};

use crate::terminal::{colors, supports_color, supports_unicode, ColorPalette};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Everything shown for one calculation, in a serialisable form.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationReport {
    pub contact: ContactOption,
    pub contact_diameter_cm: f64,
    pub crater: CraterGeometry,
    pub depth_cm: f64,
    pub impact: ImpactType,
    pub material: String,
    pub display_mode: DisplayMode,
    pub breakdown: EnergyBreakdown,
    pub energy: FormattedEnergy,
}

impl OutputFormat {
    /// Write a calculation report to stdout in this format.
    pub fn render_calculation(self, report: &CalculationReport) -> anyhow::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        match self {
            OutputFormat::Text => {
                write_calculation_text(&mut handle, report, &ColorPalette::detect())?
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, report)?;
                writeln!(handle)?;
            }
        }
        Ok(())
    }
}

/// Print the CLI logo banner, using box-drawing characters when Unicode is supported.
pub fn print_logo() {
    let (orange, gray, reset) = if supports_color() {
        (colors::ORANGE, colors::GRAY, colors::RESET)
    } else {
        ("", "", "")
    };

    if supports_unicode() {
        println!(
            "{gray}╭──────────────────────────────────╮{reset}
{gray}│{orange}   ◎  C R A T E R   E N E R G Y   {gray}│{reset}
{gray}╰──────────────────────────────────╯{reset}"
        );
    } else {
        println!(
            "{orange}+----------------------------------+
|  CRATER ENERGY ESTIMATOR         |
+----------------------------------+{reset}"
        );
    }
}

/// Describe a crater shape, e.g. `circular, diameter 10 cm`.
pub fn describe_crater(crater: &CraterGeometry) -> String {
    match crater {
        CraterGeometry::Circular { diameter_cm } => {
            format!("circular, diameter {} cm", diameter_cm)
        }
        CraterGeometry::Elliptical {
            width_cm,
            height_cm,
        } => format!("elliptical, {} × {} cm", width_cm, height_cm),
    }
}

/// Render a strength in pascals as megapascals, e.g. `800 MPa`.
pub fn format_strength(strength_pa: f64) -> String {
    format!("{} MPa", format_number(strength_pa / 1e6, 2))
}

/// Color an energy value for terminal display.
pub fn styled_energy(energy: &FormattedEnergy, palette: &ColorPalette) -> String {
    format!(
        "{}{}{} {}{}{}",
        palette.value, energy.magnitude, palette.reset, palette.unit, energy.unit, palette.reset
    )
}

pub(crate) fn write_calculation_text<W: Write>(
    out: &mut W,
    report: &CalculationReport,
    palette: &ColorPalette,
) -> io::Result<()> {
    let label = |text: &str| format!("{}{:<10}{}", palette.label, text, palette.reset);

    writeln!(out, "{}{}", label("Contact:"), report.contact)?;
    writeln!(out, "{}{}", label("Crater:"), describe_crater(&report.crater))?;
    writeln!(out, "{}{} cm", label("Depth:"), report.depth_cm)?;
    writeln!(out, "{}{}", label("Impact:"), report.impact.label())?;
    writeln!(
        out,
        "{}{} ({})",
        label("Material:"),
        report.material,
        format_strength(report.breakdown.strength_pa)
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "{}{:.6e} m³",
        label("Volume:"),
        report.breakdown.volume_m3
    )?;
    writeln!(
        out,
        "{}{}",
        label("Energy:"),
        styled_energy(&report.energy, palette)
    )?;
    Ok(())
}

/// Print the material catalog as a table.
pub fn print_materials(materials: &[&Material]) {
    if materials.is_empty() {
        println!("No materials available in catalog.");
        return;
    }

    println!("Available materials ({}):", materials.len());
    println!("{:<22} {:>14}", "Name", "Strength");
    for material in materials {
        println!(
            "{:<22} {:>14}",
            material.name,
            format_strength(material.strength_pa)
        );
    }
}

/// Print the contact options grouped by part.
pub fn print_contacts() {
    for group in [ContactGroup::Impact, ContactGroup::Target] {
        println!("{}:", group.label());
        for option in ContactOption::ALL
            .into_iter()
            .filter(|option| option.group() == group)
        {
            println!(
                "  {:<10} {:<12} {:>5} cm",
                option.key(),
                option.label(),
                option.diameter_cm()
            );
        }
    }
}
