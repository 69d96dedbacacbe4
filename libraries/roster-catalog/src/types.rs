//! Types for catalog requests and responses.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public catalog used when no other base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Configuration for connecting to the character catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the API (e.g., "https://rickandmortyapi.com/api")
    pub base_url: String,
    /// Total time allowed for one request
    pub timeout: Duration,
    /// Time allowed for establishing the connection
    pub connect_timeout: Duration,
}

impl CatalogConfig {
    /// Create a config for the given base URL with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Override both timeouts.
    pub fn with_timeouts(mut self, timeout: Duration, connect_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.connect_timeout = connect_timeout;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

// =============================================================================
// Character Types
// =============================================================================

/// One character as returned by `GET /character/{id}`.
///
/// The upstream body carries many more fields (origin, episodes, ...);
/// they are ignored. All five fields here are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CharacterRecord {
    pub id: u32,
    pub name: String,
    /// Free-form upstream value, e.g. "Alive", "Dead" or "unknown"
    pub status: String,
    pub species: String,
    #[serde(rename = "image")]
    pub image_url: String,
}
