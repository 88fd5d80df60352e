//! Yapp Schedule
//!
//! Fetches a Yapp event-schedule document and normalizes it into a typed,
//! fully linked, sorted, date-grouped model, then renders it as text or
//! exports it as JSON.
//!
//! This crate provides the core implementation for the
//! `yapp-schedule` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install yapp-schedule
//! yapp-schedule --help
//! ```

pub mod api;
pub mod commands;
pub mod model;
pub mod output;
pub mod parser;
pub mod utils;
