//! HTTP client for the scan-completion endpoint.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::response::ScanResponse;

/// Endpoint of a locally running scan-completion backend.
pub const DEFAULT_SCAN_URL: &str = "http://localhost:5000/process_scan";

fn default_url() -> String {
    DEFAULT_SCAN_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

/// Connection settings for [`Client`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Full URL of the scan endpoint.
    #[serde(default = "default_url")]
    pub url: String,
    /// Whole-request timeout in milliseconds. Ignored on WASM.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Durations beyond `u64::MAX` milliseconds saturate.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Client that requests one completed scan per call.
///
/// Requests are never retried; a failure is returned to the caller as is.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Client for [`DEFAULT_SCAN_URL`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    #[must_use]
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POST an empty body to the scan endpoint and return the raw response body.
    pub async fn fetch_bytes(&self) -> Result<Vec<u8>> {
        tracing::debug!("Requesting scan from {}", self.config.url);

        let request = self.http.post(&self.config.url).body(Vec::new());
        #[cfg(not(target_family = "wasm"))]
        let request = request.timeout(self.config.timeout());

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        tracing::debug!("Received {} bytes of scan data", bytes.len());
        Ok(bytes.to_vec())
    }

    /// Fetch and decode one completed scan.
    pub async fn fetch_scan(&self) -> Result<ScanResponse> {
        let bytes = self.fetch_bytes().await?;
        ScanResponse::from_json(&bytes)
    }
}
