//! # Character ViewModel
//!
//! Owns the character list, the search query and the load state, and runs
//! the search stream:
//!
//! ```text
//! push_search_text ──▶ search_query ──▶ dedupe ──▶ debounce ──▶ search_by_name
//!                                                                   │
//!                      characters ◀── latest generation only ◀──────┘
//! ```
//!
//! Each issued search gets a generation number. Issuing a new one aborts the
//! previous task, and a result is only written if its generation is still the
//! latest, so a slow stale response can never overwrite a newer one even if
//! the abort arrives too late.
//!
//! Once the latest search has finished, successfully or not, its query is
//! published as the settled query. Callers can wait for the settled query to
//! catch up with the search query before tearing the view model down.

use crate::models::Character;
use crate::repository::CharacterRepository;
use crate::view_models::state::{LoadState, StateSlot};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Quiescence window before a query is searched
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Reactive view model for a searchable character list
pub struct CharacterViewModel {
    characters: Arc<StateSlot<Vec<Character>>>,
    search_query: StateSlot<String>,
    settled_query: Arc<StateSlot<String>>,
    load_state: StateSlot<LoadState>,
    repository: Arc<dyn CharacterRepository>,
    search_stream: JoinHandle<()>,
}

impl CharacterViewModel {
    /// Create a view model with the default debounce window.
    /// Must be called from within a tokio runtime.
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self::with_debounce(repository, DEFAULT_DEBOUNCE)
    }

    /// Create a view model with a custom debounce window
    pub fn with_debounce(repository: Arc<dyn CharacterRepository>, debounce: Duration) -> Self {
        let characters = Arc::new(StateSlot::new(Vec::new()));
        let search_query = StateSlot::new(String::new());
        let settled_query = Arc::new(StateSlot::new(String::new()));
        let load_state = StateSlot::new(LoadState::Loading);

        let search_stream = tokio::spawn(run_search_stream(
            search_query.subscribe(),
            Arc::clone(&repository),
            Arc::clone(&characters),
            Arc::clone(&settled_query),
            debounce,
        ));
        tracing::debug!(
            "CharacterViewModel created with {}ms debounce",
            debounce.as_millis()
        );

        Self {
            characters,
            search_query,
            settled_query,
            load_state,
            repository,
            search_stream,
        }
    }

    /// Record new search text. Identical consecutive values are dropped.
    pub fn push_search_text(&self, text: impl Into<String>) {
        let text = text.into();
        let modified = self.search_query.update_if(|current| {
            if *current == text {
                return false;
            }
            *current = text;
            true
        });
        if !modified {
            tracing::trace!("Ignoring duplicate search text");
        }
    }

    /// Load the full collection, reporting progress through the load state.
    /// On failure the character list is left as it was.
    pub async fn fetch_all(&self) {
        self.load_state.set(LoadState::Loading);
        tracing::debug!("Fetching all characters");

        match self.repository.fetch_all().await {
            Ok(characters) => {
                tracing::info!("Fetched {} characters", characters.len());
                self.characters.set(characters);
                self.load_state.set(LoadState::Finished);
            }
            Err(e) => {
                tracing::warn!("Failed to fetch characters: {}", e);
                self.load_state.set(LoadState::Failed(Arc::new(e)));
            }
        }
    }

    pub fn characters(&self) -> Vec<Character> {
        self.characters.get()
    }

    pub fn search_query(&self) -> String {
        self.search_query.get()
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state.get()
    }

    /// Query of the most recent search that finished while still the latest
    pub fn settled_query(&self) -> String {
        self.settled_query.get()
    }

    /// Wait until a search for the current query has finished.
    /// Returns at once if nothing has been pushed since the last search.
    pub async fn wait_until_settled(&self) {
        let query = self.search_query();
        let mut settled = self.settled_query.subscribe();
        // The sender lives in `self`, so the channel cannot close here
        let _ = settled.wait_for(|settled| *settled == query).await;
    }

    pub fn subscribe_characters(&self) -> watch::Receiver<Vec<Character>> {
        self.characters.subscribe()
    }

    pub fn subscribe_search_query(&self) -> watch::Receiver<String> {
        self.search_query.subscribe()
    }

    pub fn subscribe_settled_query(&self) -> watch::Receiver<String> {
        self.settled_query.subscribe()
    }

    pub fn subscribe_load_state(&self) -> watch::Receiver<LoadState> {
        self.load_state.subscribe()
    }
}

impl Drop for CharacterViewModel {
    fn drop(&mut self) {
        // Aborting the stream also drops its in-flight search handle
        self.search_stream.abort();
    }
}

/// Handle to an issued search; dropping it aborts the task
struct InFlightSearch {
    generation: u64,
    handle: JoinHandle<()>,
}

impl Drop for InFlightSearch {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            tracing::debug!("Cancelling superseded search #{}", self.generation);
            self.handle.abort();
        }
    }
}

/// Debounce query changes and issue one search per quiet period
async fn run_search_stream(
    mut queries: watch::Receiver<String>,
    repository: Arc<dyn CharacterRepository>,
    characters: Arc<StateSlot<Vec<Character>>>,
    settled_query: Arc<StateSlot<String>>,
    debounce: Duration,
) {
    let latest = Arc::new(AtomicU64::new(0));
    let mut in_flight: Option<InFlightSearch> = None;

    while queries.changed().await.is_ok() {
        // Every further change restarts the window
        loop {
            tokio::select! {
                changed = queries.changed() => {
                    if changed.is_err() {
                        return;
                    }
                }
                _ = tokio::time::sleep(debounce) => break,
            }
        }

        let query = queries.borrow_and_update().clone();
        let generation = latest.fetch_add(1, Ordering::SeqCst) + 1;
        drop(in_flight.take());

        tracing::debug!("Issuing search #{} for '{}'", generation, query);
        let handle = tokio::spawn(run_search(
            query,
            generation,
            Arc::clone(&latest),
            Arc::clone(&repository),
            Arc::clone(&characters),
            Arc::clone(&settled_query),
        ));
        in_flight = Some(InFlightSearch { generation, handle });
    }

    tracing::debug!("Search stream closed");
}

async fn run_search(
    query: String,
    generation: u64,
    latest: Arc<AtomicU64>,
    repository: Arc<dyn CharacterRepository>,
    characters: Arc<StateSlot<Vec<Character>>>,
    settled_query: Arc<StateSlot<String>>,
) {
    let is_latest = match repository.search_by_name(&query).await {
        Ok(results) => {
            let count = results.len();
            let applied = apply_if_latest(&characters, &latest, generation, results);
            if applied {
                tracing::debug!("Search #{} for '{}' applied {} characters", generation, query, count);
            } else {
                tracing::debug!("Discarding stale result of search #{}", generation);
            }
            applied
        }
        // Failed searches leave the list as it was
        Err(e) => {
            tracing::warn!("Search #{} for '{}' failed: {}", generation, query, e);
            latest.load(Ordering::SeqCst) == generation
        }
    };

    if is_latest {
        settled_query.set(query);
    }
}

/// Write `results` only if `generation` is still the latest issued search.
/// The check runs under the slot's write lock.
fn apply_if_latest(
    characters: &StateSlot<Vec<Character>>,
    latest: &AtomicU64,
    generation: u64,
    results: Vec<Character>,
) -> bool {
    characters.update_if(|current| {
        if latest.load(Ordering::SeqCst) != generation {
            return false;
        }
        *current = results;
        true
    })
}
