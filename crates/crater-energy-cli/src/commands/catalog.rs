//! Handlers for the `materials` and `contacts` listing subcommands.

use anyhow::Result;
use serde::Serialize;

use crater_energy_lib::{ContactGroup, ContactOption, MaterialTable};

use crate::output::{print_contacts, print_materials, OutputFormat};

/// Serialisable view of a contact option.
#[derive(Debug, Serialize)]
struct ContactEntry {
    key: &'static str,
    label: &'static str,
    group: ContactGroup,
    diameter_cm: f64,
}

/// List the materials available to calculations.
pub fn handle_list_materials(table: &MaterialTable, format: OutputFormat) -> Result<()> {
    let materials = table.materials_sorted();
    match format {
        OutputFormat::Text => print_materials(&materials),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&materials)?),
    }
    Ok(())
}

/// List the 8 selectable contact options.
pub fn handle_list_contacts(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_contacts(),
        OutputFormat::Json => {
            let entries: Vec<ContactEntry> = ContactOption::ALL
                .into_iter()
                .map(|option| ContactEntry {
                    key: option.key(),
                    label: option.label(),
                    group: option.group(),
                    diameter_cm: option.diameter_cm(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }
    Ok(())
}
