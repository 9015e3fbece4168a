//! Error types for the scan client.

use voxscan_project::ProjectError;

/// Errors that can occur while fetching or projecting a scan.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport-level failure (connection refused, timeout, TLS, ...).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned HTTP {0}")]
    Status(u16),

    /// The response body is not a valid scan payload.
    #[error("failed to decode scan payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The decoded scan could not be projected.
    #[error("failed to project scan: {0}")]
    Project(#[from] ProjectError),
}

/// Result type for scan client operations.
pub type Result<T> = std::result::Result<T, Error>;
