//! Catalog HTTP client.

use crate::error::{FetchError, Result};
use crate::source::CharacterSource;
use crate::types::{CatalogConfig, CharacterRecord};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

/// HTTP client for the character catalog.
///
/// Each call is an independent GET; nothing is cached between calls.
/// The underlying connection pool is shared by clones.
///
/// # Example
///
/// ```ignore
/// use roster_catalog::{CatalogClient, CatalogConfig};
///
/// let client = CatalogClient::new(CatalogConfig::default())?;
/// let rick = client.fetch_character(1).await?;
/// println!("{} ({})", rick.name, rick.status);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(FetchError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(FetchError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        url::Url::parse(&base_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("Roster/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Request)?;

        Ok(Self { http, base_url })
    }

    /// Get the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single character resource.
    pub fn character_url(&self, id: u32) -> String {
        format!("{}/character/{}", self.base_url, id)
    }

    /// Fetch one character by id.
    ///
    /// The id is not range-checked locally; an unknown id surfaces as
    /// whatever status the catalog answers with.
    pub async fn fetch_character(&self, id: u32) -> Result<CharacterRecord> {
        let url = self.character_url(id);
        debug!(url = %url, id, "Fetching character");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                FetchError::Unreachable(e.to_string())
            } else {
                FetchError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let record: CharacterRecord = response.json().await.map_err(|e| {
                FetchError::Parse(format!("Failed to parse character {}: {}", id, e))
            })?;

            debug!(id = record.id, name = %record.name, "Fetched character");
            Ok(record)
        } else if status.as_u16() == 404 {
            warn!(id, "Character not found");
            Err(FetchError::Status {
                status: 404,
                message: format!("Character not found: {}", id),
            })
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!(id, status = %status, "Catalog request failed");
            Err(FetchError::Status {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

#[async_trait]
impl CharacterSource for CatalogClient {
    async fn fetch_character(&self, id: u32) -> Result<CharacterRecord> {
        CatalogClient::fetch_character(self, id).await
    }
}
