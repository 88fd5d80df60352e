//! The normalized model: reference resolution, ordering, and the
//! categorized facade handed to rendering.

pub mod facade;
pub mod order;
pub mod resolver;

pub use facade::{CategorizedModel, Category};
pub use order::{group_by_day, order_events, order_tracks};
pub use resolver::{resolve, ModelIndex};

use crate::api::schema::RawDocument;
use crate::parser::record::construct;
use crate::utils::error::ModelError;
use log::debug;

/// Normalize a raw document into a fully linked model.
///
/// Runs the whole pipeline downstream of the fetch: construct one node per
/// record, then index and resolve references. All-or-nothing; no partially
/// linked model is ever returned.
pub fn build_model(document: &RawDocument) -> Result<ModelIndex, ModelError> {
    let nodes = document
        .records()
        .map(construct)
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Constructed {} nodes", nodes.len());

    Ok(resolve(nodes)?)
}
