//! Yapp Schedule CLI
//!
//! Fetches a Yapp event schedule and prints it as a normalized,
//! date-grouped listing, or exports the model as JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use yapp_schedule::commands::{execute_export, execute_show, ExportArgs, ShowArgs};
use yapp_schedule::utils::config::API_BASE_URL;

/// Yapp Schedule - normalized schedule viewing for Yapp apps
#[derive(Parser, Debug)]
#[command(name = "yapp-schedule")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch a schedule and print it as text
    Show {
        /// App ID, or a full app URL to take the ID from
        #[arg(short, long)]
        id: String,

        /// API base URL
        #[arg(long, default_value = API_BASE_URL)]
        base: String,
    },

    /// Fetch a schedule and write the normalized model as JSON
    Export {
        /// App ID, or a full app URL to take the ID from
        #[arg(short, long)]
        id: String,

        /// Output path for the JSON model
        #[arg(short, long, default_value = "schedule.json")]
        output: PathBuf,

        /// API base URL
        #[arg(long, default_value = API_BASE_URL)]
        base: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Show { id, base } => {
            execute_show(ShowArgs {
                id_or_url: id,
                base_url: base,
            })?;
        }

        Commands::Export { id, output, base } => {
            execute_export(ExportArgs {
                id_or_url: id,
                base_url: base,
                output,
            })?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Display version information
fn display_version() {
    println!("Yapp Schedule v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Fetches and normalizes Yapp event schedules.");
}
