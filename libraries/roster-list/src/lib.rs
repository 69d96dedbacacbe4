//! Roster List
//!
//! Loads a fixed range of characters from a [`CharacterSource`] and
//! exposes them as an observable, atomically published list.
//!
//! ```ignore
//! use roster_catalog::{CatalogClient, CatalogConfig};
//! use roster_list::{CharacterListController, ListOptions};
//! use std::sync::Arc;
//!
//! let client = Arc::new(CatalogClient::new(CatalogConfig::default())?);
//! let (controller, handle) = CharacterListController::start(client, ListOptions::default());
//!
//! let mut updates = controller.subscribe();
//! updates.changed().await?;
//! for character in updates.borrow().iter() {
//!     println!("{}", character.name);
//! }
//! ```
//!
//! [`CharacterSource`]: roster_catalog::CharacterSource

mod controller;
mod error;
mod types;

pub use controller::{CharacterListController, LoadHandle};
pub use error::{ListError, Result};
pub use types::{CharacterList, FetchStrategy, ListOptions, LoadState, MAX_COUNT};
