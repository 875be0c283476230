//! Upstream zone-directory client.

use crate::directory::ZoneDirectory;
use crate::error::{ZonesError, ZonesErrorExt};
use rhub_domain::config::ZonesConfig;
use std::time::Duration;
use tracing::debug;

/// Thin `reqwest` wrapper around the configured upstream endpoint.
#[derive(Debug, Clone)]
pub struct ZonesClient {
    http: reqwest::Client,
    url: String,
}

impl ZonesClient {
    /// Build a client from the configured endpoint and timeout.
    ///
    /// # Errors
    /// Returns an error when the underlying HTTP client cannot be constructed.
    pub fn new(config: &ZonesConfig) -> Result<Self, ZonesError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { http, url: config.url.clone() })
    }

    /// Fetch the upstream document as-is, without reshaping it.
    ///
    /// # Errors
    /// Returns an error when the request fails or the body is not JSON.
    pub async fn fetch_raw(&self) -> Result<serde_json::Value, ZonesError> {
        debug!(url = %self.url, "Fetching zone directory");

        let response = self.http.get(&self.url).send().await?.error_for_status()?;
        let value = response.json::<serde_json::Value>().await?;

        Ok(value)
    }

    /// Fetch and decode the upstream document into the directory model.
    ///
    /// # Errors
    /// Returns an error when the request fails or the document shape is off.
    pub async fn fetch_directory(&self) -> Result<ZoneDirectory, ZonesError> {
        let raw = self.fetch_raw().await?;
        let directory = serde_json::from_value(raw)
            .map_err(ZonesError::from)
            .context("zone directory shape")?;

        Ok(directory)
    }
}
