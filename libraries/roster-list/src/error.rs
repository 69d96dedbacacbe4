use roster_catalog::FetchError;
use thiserror::Error;

/// Errors that can occur while loading the character list
#[derive(Error, Debug)]
pub enum ListError {
    #[error("Failed to fetch character {id}: {source}")]
    Fetch {
        id: u32,
        #[source]
        source: FetchError,
    },

    #[error("Invalid id range: {0}")]
    InvalidRange(String),

    #[error("Load already started")]
    AlreadyStarted,

    #[error("Load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ListError {
    /// Catalog id whose fetch failed, if this is a fetch failure.
    pub fn failed_id(&self) -> Option<u32> {
        match self {
            ListError::Fetch { id, .. } => Some(*id),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ListError>;
