//! Show command implementation.
//!
//! The show command:
//! 1. Fetches the raw schedule document
//! 2. Normalizes it into the linked model
//! 3. Buckets the model by category
//! 4. Renders the schedule as text to stdout

use crate::api::YappClient;
use crate::model::{build_model, CategorizedModel};
use crate::output::render_schedule;
use anyhow::{Context, Result};
use log::{debug, info};

/// Arguments for the show command
#[derive(Debug, Clone)]
pub struct ShowArgs {
    /// App ID, or a full app URL to take the ID from
    pub id_or_url: String,

    /// Base URL of the schedule API
    pub base_url: String,
}

/// Execute the show command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Fetch failures (network, bad status, malformed body)
/// * Normalization failures (malformed dates, inconsistent references)
pub fn execute_show(args: ShowArgs) -> Result<()> {
    info!("Loading schedule for: {}", args.id_or_url);

    let client = YappClient::new(&args.base_url)?;
    let document = client
        .fetch_document(&args.id_or_url)
        .context("Failed to fetch schedule document")?;

    let index = build_model(&document).context("Failed to normalize schedule document")?;
    debug!("Model holds {} nodes", index.len());

    let model = CategorizedModel::from_index(&index);
    print!("{}", render_schedule(&model));

    Ok(())
}
