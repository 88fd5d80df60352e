//! Outbound surfaces: text rendering, JSON export, and calendar links.

pub mod calendar;
pub mod json;
pub mod text;

pub use calendar::google_calendar_url;
pub use json::write_model;
pub use text::render_schedule;
