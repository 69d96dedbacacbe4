//! Abstraction over anything that can produce character records.

use crate::error::Result;
use crate::types::CharacterRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// A source of character records addressed by catalog id.
///
/// `CatalogClient` is the HTTP implementation. Consumers should depend on
/// this trait so a fake source can be injected in tests.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Fetch one character.
    ///
    /// # Errors
    /// Returns an error if the record cannot be retrieved or parsed.
    async fn fetch_character(&self, id: u32) -> Result<CharacterRecord>;
}

#[async_trait]
impl<S: CharacterSource + ?Sized> CharacterSource for Arc<S> {
    async fn fetch_character(&self, id: u32) -> Result<CharacterRecord> {
        (**self).fetch_character(id).await
    }
}
