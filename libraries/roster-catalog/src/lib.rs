//! Roster Catalog Client
//!
//! HTTP client library for the public character catalog
//! (`https://rickandmortyapi.com/api`).
//!
//! # Features
//!
//! - **Single-record fetch**: `GET /character/{id}` parsed into a [`CharacterRecord`]
//! - **Injectable source**: [`CharacterSource`] lets consumers swap in a fake
//!
//! # Example
//!
//! ```ignore
//! use roster_catalog::{CatalogClient, CatalogConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(CatalogConfig::default())?;
//!
//!     let character = client.fetch_character(1).await?;
//!     println!("{} is {}", character.name, character.status);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod source;
mod types;

pub use client::CatalogClient;
pub use error::{FetchError, Result};
pub use source::CharacterSource;
pub use types::{CatalogConfig, CharacterRecord, DEFAULT_BASE_URL};
