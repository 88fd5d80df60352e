//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while fetching the schedule document
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error(
        "could not retrieve data for app '{app_id}' (HTTP {status}); \
         please ensure that the app ID or URL is entered correctly"
    )]
    BadStatus { app_id: String, status: u16 },

    #[error("invalid schedule document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

/// Errors that can occur while decoding compact date/time strings
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("date string '{0}' does not match YYYYMMDD or YYYYMMDDHHMM")]
    BadCompactDate(String),

    #[error("date string '{0}' has a component out of range")]
    OutOfRange(String),
}

/// Errors that can occur while linking records into a model
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("duplicate record identifier: {0}")]
    DuplicateId(String),

    #[error("relationship references unknown identifier: {0}")]
    UnknownId(String),

    #[error("schedule-item reference '{0}' does not resolve to an event")]
    WrongKind(String),
}

/// Errors that can occur while building the full model from a document.
///
/// Wraps the two ways normalization can fail: a malformed date on a record,
/// or an inconsistent reference graph.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
