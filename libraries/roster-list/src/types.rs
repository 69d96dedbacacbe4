use crate::error::{ListError, Result};
use roster_catalog::CharacterRecord;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, RangeInclusive};
use std::sync::Arc;

/// Ordered, immutable snapshot of loaded characters.
///
/// Order is fetch order (ascending catalog id). Cloning is cheap; clones
/// share the same records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterList {
    records: Arc<Vec<CharacterRecord>>,
}

impl CharacterList {
    pub fn new(records: Vec<CharacterRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    /// Find a record by catalog id
    pub fn find(&self, id: u32) -> Option<&CharacterRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

impl Deref for CharacterList {
    type Target = [CharacterRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl<'a> IntoIterator for &'a CharacterList {
    type Item = &'a CharacterRecord;
    type IntoIter = std::slice::Iter<'a, CharacterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Lifecycle of a list controller
///
/// `Idle -> Loading -> Loaded` or `Idle -> Loading -> Failed`.
/// Both `Loaded` and `Failed` are final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed { id: u32, message: String },
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadState::Loaded | LoadState::Failed { .. })
    }
}

/// How the controller walks the id range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStrategy {
    /// One request at a time, each awaited before the next starts
    #[default]
    Sequential,
    /// All requests in flight at once; output still in ascending id order
    Concurrent,
}

/// Most characters a single load may request
pub const MAX_COUNT: u32 = 1_000;

/// Which ids to load and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub first_id: u32,
    pub count: u32,
    pub strategy: FetchStrategy,
}

impl ListOptions {
    /// Check that the range is non-empty, starts at 1 or above, stays
    /// within [`MAX_COUNT`] and ends at or below `u32::MAX`.
    pub fn validate(&self) -> Result<()> {
        if self.first_id == 0 {
            return Err(ListError::InvalidRange(
                "catalog ids start at 1; first_id cannot be 0".to_string(),
            ));
        }

        if self.count == 0 {
            return Err(ListError::InvalidRange(
                "count must be at least 1".to_string(),
            ));
        }

        if self.count > MAX_COUNT {
            return Err(ListError::InvalidRange(format!(
                "count {} exceeds the maximum of {}",
                self.count, MAX_COUNT
            )));
        }

        if self.last_id().is_none() {
            return Err(ListError::InvalidRange(format!(
                "{} ids starting at {} run past the largest id {}",
                self.count,
                self.first_id,
                u32::MAX
            )));
        }

        Ok(())
    }

    /// Last id covered, or `None` when the range is empty or overflows
    pub fn last_id(&self) -> Option<u32> {
        self.count
            .checked_sub(1)
            .and_then(|extra| self.first_id.checked_add(extra))
    }

    /// Catalog ids covered by these options, ascending.
    ///
    /// Empty when [`last_id`](Self::last_id) is `None`; [`validate`](Self::validate)
    /// rejects those options before a load starts.
    pub fn ids(&self) -> RangeInclusive<u32> {
        match self.last_id() {
            Some(last) => self.first_id..=last,
            None => RangeInclusive::new(1, 0),
        }
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            first_id: 1,
            count: 10,
            strategy: FetchStrategy::Sequential,
        }
    }
}
