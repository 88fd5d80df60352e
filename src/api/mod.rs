//! Network access to the schedule API: wire types and the HTTP client.

pub mod client;
pub mod schema;

pub use client::{extract_app_id, YappClient};
pub use schema::{RawDocument, RawRecord, Relationship, ResourceRef};
