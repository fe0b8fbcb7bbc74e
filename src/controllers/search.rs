// src/controllers/search.rs

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::catalog::client::CatalogApi;
use crate::domain::product::Product;

const DEBOUNCE: Duration = Duration::from_millis(500);
const SEARCH_LIMIT: u32 = 20;

/// Where a search screen currently is.
///
/// `Empty` covers both "no matches" and a failed fetch; the failure is
/// swallowed at this level and only logged. Retry is typing again.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    Idle,
    Searching,
    Results(Vec<Product>),
    Empty,
}

struct SearchShared {
    phase: Mutex<SearchPhase>,
    /// Sequence number of the newest scheduled fetch. A completion only
    /// applies while it is still the newest; anything older is discarded,
    /// so an unordered network can never put stale results on screen.
    issued: AtomicU64,
}

/// Debounce-and-fetch driver for the free-text search screen.
///
/// Each keystroke restarts a quiet-period timer; only the last keystroke
/// inside any window reaches the network. The previously scheduled task is
/// aborted outright (timer and any fetch it already started), not left to
/// fire into the void. One controller instance per screen; must run inside
/// a tokio runtime.
pub struct SearchController<C> {
    client: Arc<C>,
    debounce: Duration,
    limit: u32,
    shared: Arc<SearchShared>,
    pending: Option<JoinHandle<()>>,
}

impl<C> SearchController<C>
where
    C: CatalogApi + Send + Sync + 'static,
{
    pub fn new(client: Arc<C>) -> Self {
        Self::with_debounce(client, DEBOUNCE)
    }

    pub fn with_debounce(client: Arc<C>, debounce: Duration) -> Self {
        Self {
            client,
            debounce,
            limit: SEARCH_LIMIT,
            shared: Arc::new(SearchShared {
                phase: Mutex::new(SearchPhase::Idle),
                issued: AtomicU64::new(0),
            }),
            pending: None,
        }
    }

    /// Feed one keystroke's worth of input.
    ///
    /// Empty or whitespace-only input goes straight to `Idle` without a
    /// fetch and fences off anything still in flight.
    pub fn on_input(&mut self, text: &str) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.shared.issued.fetch_add(1, Ordering::SeqCst);
            *self.shared.phase.lock().unwrap() = SearchPhase::Idle;
            return;
        }

        let seq = self.shared.issued.fetch_add(1, Ordering::SeqCst) + 1;
        *self.shared.phase.lock().unwrap() = SearchPhase::Searching;

        let client = Arc::clone(&self.client);
        let shared = Arc::clone(&self.shared);
        let term = trimmed.to_string();
        let debounce = self.debounce;
        let limit = self.limit;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            debug!(%term, seq, "debounce settled, searching");

            let phase = match client.search(&term, limit).await {
                Ok(records) if records.is_empty() => SearchPhase::Empty,
                Ok(records) => {
                    let now = Utc::now();
                    SearchPhase::Results(
                        records
                            .iter()
                            .map(|record| Product::from_record(record, now))
                            .collect(),
                    )
                }
                Err(err) => {
                    warn!(%term, error = %err, "search fetch failed");
                    SearchPhase::Empty
                }
            };

            let mut current = shared.phase.lock().unwrap();
            if shared.issued.load(Ordering::SeqCst) != seq {
                debug!(seq, "discarding superseded search completion");
                return;
            }
            *current = phase;
        }));
    }

    /// The clear affordance: back to `Idle`, nothing in flight survives.
    pub fn clear(&mut self) {
        self.on_input("");
    }

    pub fn phase(&self) -> SearchPhase {
        self.shared.phase.lock().unwrap().clone()
    }
}

impl<C> Drop for SearchController<C> {
    // Screen teardown must not leave a fetch running.
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
