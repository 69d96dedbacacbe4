//! Error types for the catalog client.

use thiserror::Error;

/// Errors that can occur when fetching a character from the catalog.
///
/// Callers that only care whether a fetch worked can treat every variant
/// the same way; the split exists for logging and diagnostics.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Catalog is offline or unreachable
    #[error("Catalog unreachable: {0}")]
    Unreachable(String),

    /// Catalog answered with a non-success status
    #[error("Catalog returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid catalog base URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// HTTP status code of the failed response, if the catalog answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the failure happened before any response was received.
    pub fn is_network(&self) -> bool {
        match self {
            FetchError::Unreachable(_) => true,
            FetchError::Request(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, FetchError>;
