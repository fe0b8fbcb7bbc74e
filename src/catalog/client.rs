// client.rs
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::catalog::catalog_error::{CatalogError, CatalogResult};
use crate::catalog::models::{ApiEnvelope, CatalogRecord};
use crate::catalog::query::ProductQuery;

const BASE_URL: &str = "https://furniture-api.fly.dev/v1";
const BASE_URL_ENV: &str = "FURNITURE_API_URL";
const USER_AGENT: &str = "furniture-storefront/0.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// How many records `discounted` pulls before filtering client-side.
const DISCOUNT_SCAN_LIMIT: u32 = 50;

/// Construction parameters for [`CatalogClient`].
///
/// Built explicitly and passed to whoever needs the client; there is no
/// process-wide singleton. The base URL must not carry a trailing slash.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var(BASE_URL_ENV).unwrap_or_else(|_| BASE_URL.to_string()),
            timeout: REQUEST_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Read operations against the catalog service.
///
/// The trait is the seam between controllers and the network: production
/// code hands controllers a [`CatalogClient`], tests hand them a canned
/// stand-in. The derived reads (`search`, `featured`, `by_category`,
/// `discounted`) are defined in terms of `list` so every implementation
/// gets them for free.
#[async_trait]
pub trait CatalogApi {
    /// One filtered/paginated read of `/products`. No retry, no cache.
    async fn list(&self, query: &ProductQuery) -> CatalogResult<Vec<CatalogRecord>>;

    /// Single-record read by identifying key.
    async fn get_by_sku(&self, sku: &str) -> CatalogResult<CatalogRecord>;

    /// Free-text name search.
    async fn search(&self, term: &str, limit: u32) -> CatalogResult<Vec<CatalogRecord>> {
        let query = ProductQuery {
            name: Some(term.to_string()),
            limit: Some(limit),
            ..ProductQuery::default()
        };
        self.list(&query).await
    }

    /// Featured products, newest first.
    async fn featured(&self, limit: u32) -> CatalogResult<Vec<CatalogRecord>> {
        let query = ProductQuery {
            sort: Some(crate::reference::SortKey::Newest),
            featured: true,
            limit: Some(limit),
            ..ProductQuery::default()
        };
        self.list(&query).await
    }

    /// Products in one category. The token is lowercased on the way out;
    /// the service only knows lowercase category literals.
    async fn by_category(&self, category: &str, limit: u32, offset: u32) -> CatalogResult<Vec<CatalogRecord>> {
        let query = ProductQuery {
            category: Some(category.to_lowercase()),
            ..ProductQuery::default()
        }
        .with_page(limit, offset);
        self.list(&query).await
    }

    /// Records carrying a discount, truncated to `limit`.
    ///
    /// The service exposes no discount predicate, so this fetches one
    /// bounded page and filters it here: fetch, then filter, then
    /// truncate. Discounted records beyond the first `DISCOUNT_SCAN_LIMIT`
    /// are not seen; known, accepted approximation.
    async fn discounted(&self, limit: usize) -> CatalogResult<Vec<CatalogRecord>> {
        let query = ProductQuery {
            limit: Some(DISCOUNT_SCAN_LIMIT),
            ..ProductQuery::default()
        };
        let records = self.list(&query).await?;
        let mut discounted: Vec<CatalogRecord> = records
            .into_iter()
            .filter(|record| record.discount_price.is_some())
            .collect();
        discounted.truncate(limit);
        Ok(discounted)
    }
}

/// HTTP client for the catalog service's read endpoints.
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: ClientConfig) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One GET, decoded into the service envelope.
    ///
    /// Transport failures, non-2xx statuses, and undecodable bodies each
    /// get their own error kind; an envelope with `success: false` is the
    /// caller's to interpret.
    async fn get_envelope<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
    ) -> CatalogResult<ApiEnvelope<T>> {
        let url = format!("{}{}", self.base_url, path_and_query);
        debug!(%url, "catalog GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "catalog request failed");
            return Err(CatalogError::Status(status.as_u16()));
        }

        response.json::<ApiEnvelope<T>>().await.map_err(|e| {
            if e.is_decode() {
                CatalogError::Decode(e.to_string())
            } else {
                CatalogError::Transport(e.to_string())
            }
        })
    }

    fn rejected<T>(envelope: &ApiEnvelope<T>) -> CatalogError {
        CatalogError::Rejected(
            envelope
                .message
                .clone()
                .unwrap_or_else(|| "no detail provided".to_string()),
        )
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn list(&self, query: &ProductQuery) -> CatalogResult<Vec<CatalogRecord>> {
        let query_string = query.params().to_query_string();
        let path = if query_string.is_empty() {
            "/products".to_string()
        } else {
            format!("/products?{query_string}")
        };

        let envelope = self.get_envelope::<Vec<CatalogRecord>>(&path).await?;
        if !envelope.success {
            return Err(Self::rejected(&envelope));
        }
        Ok(envelope.data.unwrap_or_default())
    }

    async fn get_by_sku(&self, sku: &str) -> CatalogResult<CatalogRecord> {
        let path = format!("/products/{sku}");
        let envelope = self.get_envelope::<CatalogRecord>(&path).await?;
        if !envelope.success {
            return Err(Self::rejected(&envelope));
        }
        envelope
            .data
            .ok_or_else(|| CatalogError::Decode("envelope carried no record".to_string()))
    }
}
