// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

pub mod calculate;
pub mod catalog;
pub mod session;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crater_energy_lib::MaterialTable;

/// Environment variable naming a CSV materials catalog to use instead of the built-in table.
pub const MATERIALS_ENV: &str = "CRATER_ENERGY_MATERIALS";

/// Resolve the material table for this run.
///
/// Precedence: the `--materials` flag, then `CRATER_ENERGY_MATERIALS`, then the
/// built-in catalog.
pub fn load_material_table(flag: Option<&Path>) -> Result<MaterialTable> {
    let path = flag
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(MATERIALS_ENV).map(PathBuf::from));

    match path {
        Some(path) => MaterialTable::from_path(&path)
            .with_context(|| format!("failed to load materials from {}", path.display())),
        None => {
            debug!("using built-in material catalog");
            Ok(MaterialTable::builtin().clone())
        }
    }
}
