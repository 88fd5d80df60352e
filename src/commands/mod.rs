//! CLI command implementations.

pub mod export;
pub mod show;

pub use export::{execute_export, ExportArgs};
pub use show::{execute_show, ShowArgs};
