//! Wire schema for the schedule document.
//!
//! The API returns a JSON-API-like payload: one primary record under `data`
//! plus a flat list of `included` records, linked to each other by
//! `{id, type}` references. Only the subset of that shape actually used by
//! schedules is modeled here.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Top-level document returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    /// The primary record (the app itself)
    pub data: RawRecord,

    /// Every other record referenced by the document
    #[serde(default)]
    pub included: Vec<RawRecord>,
}

impl RawDocument {
    /// Iterate all records in document traversal order: primary first, then included.
    pub fn records(&self) -> impl Iterator<Item = &RawRecord> {
        std::iter::once(&self.data).chain(self.included.iter())
    }
}

/// One type-tagged record of the document. Never mutated after fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    /// Unique identifier within the document
    pub id: String,

    /// Type tag declaring the record kind (e.g. "tracks", "schedule-items")
    #[serde(rename = "type")]
    pub kind: String,

    /// Freeform attributes; shape depends on the record kind
    #[serde(default)]
    pub attributes: Map<String, Value>,

    /// Outgoing references to other records, keyed by relationship name
    #[serde(default)]
    pub relationships: HashMap<String, Relationship>,
}

/// A named relationship holding the references it points at
#[derive(Debug, Clone, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Vec<ResourceRef>,
}

/// An `{id, type}` pointer from one record to another
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ResourceRef {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: String,
}
