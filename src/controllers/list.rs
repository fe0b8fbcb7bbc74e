// src/controllers/list.rs

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::{debug, warn};

use crate::catalog::client::CatalogApi;
use crate::catalog::query::ProductQuery;
use crate::domain::filters::FilterSpec;
use crate::domain::product::Product;

const PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Idle,
    Loading,
    Refreshing,
    Error,
}

/// Everything a list screen renders from.
///
/// `records` accumulates in fetch order; duplicates are possible when the
/// upstream does not paginate stably, and are kept as-is. `has_more` flips
/// to false exactly when a page comes back short.
#[derive(Debug, Clone)]
pub struct PageState {
    pub records: Vec<Product>,
    pub next_offset: u32,
    pub has_more: bool,
    pub status: ListStatus,
    pub error: Option<String>,
}

impl PageState {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            next_offset: 0,
            has_more: true,
            status: ListStatus::Idle,
            error: None,
        }
    }
}

/// Paginated fetch-more / pull-to-refresh driver for one list screen.
///
/// The filter is fixed at construction; a changed filter means a fresh
/// controller. Rapid repeated calls are serialized by the status guard,
/// and a refresh always wins over an in-flight page: each refresh bumps
/// the epoch, and page responses from an older epoch are dropped.
pub struct ListController<C> {
    client: Arc<C>,
    filter: FilterSpec,
    page_size: u32,
    state: Mutex<PageState>,
    epoch: AtomicU64,
}

impl<C> ListController<C>
where
    C: CatalogApi + Send + Sync,
{
    pub fn new(client: Arc<C>, filter: FilterSpec) -> Self {
        Self::with_page_size(client, filter, PAGE_SIZE)
    }

    pub fn with_page_size(client: Arc<C>, filter: FilterSpec, page_size: u32) -> Self {
        Self {
            client,
            filter,
            page_size,
            state: Mutex::new(PageState::new()),
            epoch: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> PageState {
        self.state.lock().unwrap().clone()
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    fn page_query(&self, offset: u32) -> ProductQuery {
        ProductQuery::from(&self.filter).with_page(self.page_size, offset)
    }

    /// Fetch the next page and append it.
    ///
    /// No-op while a fetch is already running or once the end of the data
    /// was reached; the first call (offset 0) doubles as the initial load.
    pub async fn load_more(&self) {
        let (offset, epoch) = {
            let mut state = self.state.lock().unwrap();
            if matches!(state.status, ListStatus::Loading | ListStatus::Refreshing)
                || !state.has_more
            {
                return;
            }
            state.status = ListStatus::Loading;
            state.error = None;
            (state.next_offset, self.epoch.load(Ordering::SeqCst))
        };

        let outcome = self.client.list(&self.page_query(offset)).await;

        let mut state = self.state.lock().unwrap();
        if self.epoch.load(Ordering::SeqCst) != epoch {
            // A refresh superseded this page; its response owns the state.
            debug!(offset, "discarding page from an older epoch");
            return;
        }
        match outcome {
            Ok(records) => {
                let now = Utc::now();
                state.has_more = records.len() as u32 == self.page_size;
                state
                    .records
                    .extend(records.iter().map(|record| Product::from_record(record, now)));
                state.next_offset = offset + self.page_size;
                state.status = ListStatus::Idle;
            }
            Err(err) => {
                warn!(offset, error = %err, "page fetch failed");
                state.status = ListStatus::Error;
                state.error = Some(err.to_string());
            }
        }
    }

    /// Re-fetch from the top and replace the buffer wholesale.
    ///
    /// Runs regardless of `next_offset`; on failure the accumulated
    /// records stay untouched and only the error surfaces. Retry is the
    /// caller's affordance, re-invoking this is all it takes.
    pub async fn refresh(&self) {
        {
            let mut state = self.state.lock().unwrap();
            if state.status == ListStatus::Refreshing {
                return;
            }
            state.status = ListStatus::Refreshing;
            state.error = None;
            self.epoch.fetch_add(1, Ordering::SeqCst);
        }

        let outcome = self.client.list(&self.page_query(0)).await;

        // No epoch re-check needed here: the status guard keeps a second
        // refresh from starting while this one is in flight, and only
        // refreshes bump the epoch.
        let mut state = self.state.lock().unwrap();
        match outcome {
            Ok(records) => {
                let now = Utc::now();
                state.has_more = records.len() as u32 == self.page_size;
                state.records = records
                    .iter()
                    .map(|record| Product::from_record(record, now))
                    .collect();
                state.next_offset = self.page_size;
                state.status = ListStatus::Idle;
            }
            Err(err) => {
                warn!(error = %err, "refresh fetch failed");
                state.status = ListStatus::Error;
                state.error = Some(err.to_string());
            }
        }
    }
}
