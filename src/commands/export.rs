//! Export command implementation.
//!
//! Fetches and normalizes a schedule like `show`, but writes the categorized
//! model to a JSON file instead of rendering it.

use crate::api::YappClient;
use crate::model::{build_model, CategorizedModel};
use crate::output::write_model;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Debug, Clone)]
pub struct ExportArgs {
    /// App ID, or a full app URL to take the ID from
    pub id_or_url: String,

    /// Base URL of the schedule API
    pub base_url: String,

    /// Path of the JSON file to write
    pub output: PathBuf,
}

/// Execute the export command
///
/// **Public** - main entry point called from main.rs
pub fn execute_export(args: ExportArgs) -> Result<()> {
    info!("Exporting schedule for: {}", args.id_or_url);

    let client = YappClient::new(&args.base_url)?;
    let document = client
        .fetch_document(&args.id_or_url)
        .context("Failed to fetch schedule document")?;

    let index = build_model(&document).context("Failed to normalize schedule document")?;
    let model = CategorizedModel::from_index(&index);

    write_model(&model, &args.output)
        .with_context(|| format!("Failed to write model to {}", args.output.display()))?;

    println!("Exported schedule to {}", args.output.display());

    Ok(())
}
