use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// envelope
//  ├── success
//  ├── data          (array for list endpoints, object for /products/{sku})
//  ├── count
//  └── message       (only populated on failures)

/// Uniform response wrapper the catalog service puts around every payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub count: Option<u64>,
    pub message: Option<String>,
}

/// One product entry exactly as the catalog service stores it.
///
/// Absent fields deserialize to `None`; the service omits them rather than
/// sending nulls or zero sentinels.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogRecord {
    /// Unique, stable identifying key.
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub discount_price: Option<f64>,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub wood_type: Option<String>,
    pub finish: Option<String>,
    pub dimensions: Option<String>,
    pub weight: Option<f64>,
    #[serde(default)]
    pub stock: u32,
    pub status: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub tags: Option<Vec<String>>,
}
