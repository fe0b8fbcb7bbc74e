// src/tests/utils.rs

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::catalog::client::CatalogApi;
use crate::catalog::models::CatalogRecord;
use crate::catalog::query::ProductQuery;
use crate::catalog::{CatalogError, CatalogResult};

/// Route controller logs to the test output when RUST_LOG asks for them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One canned answer for a `list` call, optionally delivered late so tests
/// can stage in-flight races on the paused clock.
pub struct PlannedPage {
    pub delay: Duration,
    pub result: CatalogResult<Vec<CatalogRecord>>,
}

/// In-memory stand-in for the catalog service.
///
/// Answers `list` calls from a FIFO plan (empty page once the plan runs
/// dry) and records every query it saw, so tests can assert both what was
/// fetched and how often.
pub struct StubCatalog {
    plan: Mutex<VecDeque<PlannedPage>>,
    calls: Mutex<Vec<ProductQuery>>,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self {
            plan: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn plan_page(&self, records: Vec<CatalogRecord>) {
        self.plan_page_after(Duration::ZERO, records);
    }

    pub fn plan_page_after(&self, delay: Duration, records: Vec<CatalogRecord>) {
        self.plan.lock().unwrap().push_back(PlannedPage {
            delay,
            result: Ok(records),
        });
    }

    pub fn plan_error(&self, error: CatalogError) {
        self.plan.lock().unwrap().push_back(PlannedPage {
            delay: Duration::ZERO,
            result: Err(error),
        });
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn queries(&self) -> Vec<ProductQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogApi for StubCatalog {
    async fn list(&self, query: &ProductQuery) -> CatalogResult<Vec<CatalogRecord>> {
        self.calls.lock().unwrap().push(query.clone());
        let planned = self
            .plan
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(PlannedPage {
                delay: Duration::ZERO,
                result: Ok(Vec::new()),
            });
        if !planned.delay.is_zero() {
            tokio::time::sleep(planned.delay).await;
        }
        planned.result
    }

    async fn get_by_sku(&self, _sku: &str) -> CatalogResult<CatalogRecord> {
        Err(CatalogError::Status(404))
    }
}

/// A plausible catalog record, created well outside the "new" window.
pub fn record(sku: &str, price: f64) -> CatalogRecord {
    CatalogRecord {
        sku: sku.to_string(),
        name: format!("{sku} walnut piece"),
        category: "chair".to_string(),
        price,
        discount_price: None,
        description: Some("Solid walnut, oiled".to_string()),
        image_path: Some(format!("https://img.example/{sku}.jpg")),
        wood_type: Some("walnut".to_string()),
        finish: Some("natural".to_string()),
        dimensions: None,
        weight: None,
        stock: 3,
        status: Some("active".to_string()),
        featured: false,
        created_at: Utc::now() - chrono::Duration::days(60),
        tags: Some(vec!["walnut".to_string()]),
    }
}

pub fn discounted_record(sku: &str, price: f64, discount: f64) -> CatalogRecord {
    let mut discounted = record(sku, price);
    discounted.discount_price = Some(discount);
    discounted
}

/// `count` records with sequential skus under one prefix.
pub fn page_of(prefix: &str, count: usize) -> Vec<CatalogRecord> {
    (0..count)
        .map(|i| record(&format!("{prefix}-{i:03}"), 100.0 + i as f64))
        .collect()
}
