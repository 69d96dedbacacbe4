//! Character list controller - owns the observable list and the fetch loop

use crate::{
    error::{ListError, Result},
    types::{CharacterList, FetchStrategy, ListOptions, LoadState},
};
use futures_util::future::join_all;
use roster_catalog::{CharacterRecord, CharacterSource};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Loads a fixed range of characters and publishes them as one list.
///
/// Observers read the list through [`subscribe`](Self::subscribe). It starts
/// empty and is replaced exactly once, after every fetch has succeeded.
/// A failed fetch stops the load, leaves the list empty and moves the
/// state to [`LoadState::Failed`].
pub struct CharacterListController {
    source: Arc<dyn CharacterSource>,
    options: ListOptions,
    characters: watch::Sender<CharacterList>,
    state: watch::Sender<LoadState>,
    /// Most recently requested id
    in_flight: AtomicU32,
}

impl CharacterListController {
    pub fn new(source: Arc<dyn CharacterSource>) -> Self {
        Self::with_options(source, ListOptions::default())
    }

    pub fn with_options(source: Arc<dyn CharacterSource>, options: ListOptions) -> Self {
        let (characters, _) = watch::channel(CharacterList::default());
        let (state, _) = watch::channel(LoadState::Idle);

        Self {
            source,
            options,
            characters,
            state,
            in_flight: AtomicU32::new(0),
        }
    }

    /// Create a controller and immediately start loading on the current runtime.
    pub fn start(
        source: Arc<dyn CharacterSource>,
        options: ListOptions,
    ) -> (Arc<Self>, LoadHandle) {
        let controller = Arc::new(Self::with_options(source, options));
        let handle = controller.spawn();
        (controller, handle)
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// Current list snapshot
    pub fn characters(&self) -> CharacterList {
        self.characters.borrow().clone()
    }

    /// Current load state
    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Receiver notified whenever a new list is published
    pub fn subscribe(&self) -> watch::Receiver<CharacterList> {
        self.characters.subscribe()
    }

    /// Receiver notified on every state transition
    pub fn subscribe_state(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    /// Run the load on a background task
    pub fn spawn(self: &Arc<Self>) -> LoadHandle {
        let controller = Arc::clone(self);
        LoadHandle {
            inner: tokio::spawn(async move { controller.load().await }),
        }
    }

    /// Fetch every configured id and publish the result.
    ///
    /// Can run once per controller; later calls return
    /// [`ListError::AlreadyStarted`]. Options that fail
    /// [`ListOptions::validate`] are rejected before any fetch and leave
    /// the controller `Idle`.
    pub async fn load(&self) -> Result<CharacterList> {
        if let Err(e) = self.options.validate() {
            error!("Refusing to load: {}", e);
            return Err(e);
        }

        let claimed = self.state.send_if_modified(|state| {
            if *state == LoadState::Idle {
                *state = LoadState::Loading;
                true
            } else {
                false
            }
        });
        if !claimed {
            return Err(ListError::AlreadyStarted);
        }
        let _unfinished = UnfinishedLoad { controller: self };

        info!(
            first_id = self.options.first_id,
            count = self.options.count,
            strategy = ?self.options.strategy,
            "Loading characters"
        );

        let fetched = match self.options.strategy {
            FetchStrategy::Sequential => self.fetch_sequential().await,
            FetchStrategy::Concurrent => self.fetch_concurrent().await,
        };

        match fetched {
            Ok(records) => {
                let list = CharacterList::new(records);
                self.characters.send_replace(list.clone());
                self.state.send_replace(LoadState::Loaded);
                info!(count = list.len(), "Published character list");
                Ok(list)
            }
            Err(e) => {
                error!("Character load failed: {}", e);
                if let ListError::Fetch { id, source } = &e {
                    self.state.send_replace(LoadState::Failed {
                        id: *id,
                        message: source.to_string(),
                    });
                }
                Err(e)
            }
        }
    }

    async fn fetch_sequential(&self) -> Result<Vec<CharacterRecord>> {
        // count is bounded by validate()
        let mut records = Vec::with_capacity(self.options.count as usize);

        for id in self.options.ids() {
            records.push(self.fetch_one(id).await?);
        }

        Ok(records)
    }

    async fn fetch_concurrent(&self) -> Result<Vec<CharacterRecord>> {
        let results = join_all(self.options.ids().map(|id| self.fetch_one(id))).await;

        // join_all keeps input order: records come out ascending and the
        // first error is the lowest failing id
        results.into_iter().collect()
    }

    async fn fetch_one(&self, id: u32) -> Result<CharacterRecord> {
        debug!(id, "Requesting character");
        self.in_flight.store(id, Ordering::Relaxed);

        let record = self
            .source
            .fetch_character(id)
            .await
            .map_err(|source| ListError::Fetch { id, source })?;

        if record.id != id {
            warn!(
                requested = id,
                received = record.id,
                "Catalog returned a different id"
            );
        }

        Ok(record)
    }
}

/// Marks a load that ends without reaching a terminal state, because the
/// source panicked or the load future was dropped, as failed at the id
/// that was last requested.
struct UnfinishedLoad<'a> {
    controller: &'a CharacterListController,
}

impl Drop for UnfinishedLoad<'_> {
    fn drop(&mut self) {
        let id = self.controller.in_flight.load(Ordering::Relaxed);
        let aborted = self.controller.state.send_if_modified(|state| {
            if *state == LoadState::Loading {
                *state = LoadState::Failed {
                    id,
                    message: "Load ended before completing".to_string(),
                };
                true
            } else {
                false
            }
        });
        if aborted {
            warn!(id, "Character load ended before completing");
        }
    }
}

/// Handle to a load running on a background task
pub struct LoadHandle {
    inner: JoinHandle<Result<CharacterList>>,
}

impl LoadHandle {
    /// Wait for the load to finish
    pub async fn wait(self) -> Result<CharacterList> {
        self.inner.await?
    }
}
