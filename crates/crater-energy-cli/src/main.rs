use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crater_energy_cli::commands::calculate::{handle_calculate, CalculateArgs};
use crater_energy_cli::commands::catalog::{handle_list_contacts, handle_list_materials};
use crater_energy_cli::commands::load_material_table;
use crater_energy_cli::commands::session::handle_session;
use crater_energy_cli::output::{print_logo, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Estimate the energy needed to punch a crater into a material"
)]
struct Cli {
    /// CSV materials catalog to use instead of the built-in table
    /// (also read from CRATER_ENERGY_MATERIALS).
    #[arg(long, global = true)]
    materials: Option<PathBuf>,

    /// Output format for command results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Suppress the banner.
    #[arg(long, global = true)]
    no_logo: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate the energy for a single crater.
    Calculate(CalculateArgs),
    /// List the material catalog with strength limits.
    Materials,
    /// List the 8 contact options.
    Contacts,
    /// Start a line-oriented interactive session on stdin.
    Session,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if !cli.no_logo && cli.format == OutputFormat::Text {
        print_logo();
    }

    let table = load_material_table(cli.materials.as_deref())?;

    match cli.command {
        Command::Calculate(args) => handle_calculate(&table, &args, cli.format),
        Command::Materials => handle_list_materials(&table, cli.format),
        Command::Contacts => handle_list_contacts(cli.format),
        Command::Session => handle_session(&table),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
