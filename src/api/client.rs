//! HTTP client for fetching schedule documents from the Yapp preview API.

use super::schema::RawDocument;
use crate::utils::config::DEFAULT_HTTP_TIMEOUT;
use crate::utils::error::FetchError;
use log::{debug, info};
use reqwest::blocking::Client;

/// Client for fetching raw schedule documents
pub struct YappClient {
    client: Client,
    base_url: String,
}

impl YappClient {
    /// Create a new client against the given API base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(FetchError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the raw document for an app
    ///
    /// **Public** - single entry point for the network fetch
    ///
    /// # Arguments
    /// * `id_or_url` - A bare app ID, or a full app URL to take the ID from
    ///
    /// # Errors
    /// * `FetchError::RequestFailed` - network-level failure
    /// * `FetchError::BadStatus` - non-2xx response (carries ID and status)
    /// * `FetchError::InvalidDocument` - body is not a valid document
    pub fn fetch_document(&self, id_or_url: &str) -> Result<RawDocument, FetchError> {
        let app_id = extract_app_id(id_or_url);
        let url = format!("{}/{}", self.base_url, app_id);

        info!("Fetching schedule for app: {}", app_id);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(FetchError::RequestFailed)?;

        if !response.status().is_success() {
            return Err(FetchError::BadStatus {
                app_id: app_id.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().map_err(FetchError::RequestFailed)?;
        let document: RawDocument = serde_json::from_str(&body)?;

        debug!(
            "Fetched document with {} included records",
            document.included.len()
        );

        Ok(document)
    }
}

/// Extract the app ID from either a bare ID or a pasted app URL.
///
/// The ID is the final `/`-delimited segment, which works for both forms.
pub fn extract_app_id(id_or_url: &str) -> &str {
    id_or_url.rsplit('/').next().unwrap_or(id_or_url)
}
