// src/domain/product.rs

use chrono::{DateTime, Utc};

use crate::catalog::models::CatalogRecord;
use crate::domain::logic::is_recent;

/// A product as the screens want to see it: prices resolved, newness
/// derived, nothing left to compute at render time. This is the
/// anti-corruption layer between the service's wire records and the UI.
///
/// Immutable once built; every transform call produces a fresh value and
/// nothing is cached or deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub sku: String,
    pub name: String,
    /// What the price tag shows: the discount price when one exists,
    /// the list price otherwise.
    pub display_price: f64,
    /// The struck-through price. Present exactly when a discount applies,
    /// so it is never equal to `display_price`.
    pub original_price: Option<f64>,
    /// Placeholder only; the catalog service has no ratings. Synthesized
    /// from the sku so repeated transforms agree; must not be presented
    /// as real review data.
    pub rating: f32,
    pub image_path: Option<String>,
    pub category: String,
    pub description: Option<String>,
    pub wood_type: Option<String>,
    pub finish: Option<String>,
    pub dimensions: Option<String>,
    pub weight: Option<f64>,
    pub stock: u32,
    pub status: Option<String>,
    pub featured: bool,
    /// Created within the last 30 days of `now` as passed to the
    /// transform. Two transforms of the same record at different times may
    /// disagree; that is inherent, not a defect.
    pub is_new: bool,
    pub tags: Vec<String>,
}

impl Product {
    /// Build the display shape from a wire record.
    ///
    /// Pure and infallible for any structurally valid record: no I/O,
    /// nothing to propagate. `now` is injected rather than read from the
    /// clock so the result is deterministic and testable.
    pub fn from_record(record: &CatalogRecord, now: DateTime<Utc>) -> Self {
        let (display_price, original_price) = match record.discount_price {
            Some(discounted) => (discounted, Some(record.price)),
            None => (record.price, None),
        };

        Product {
            sku: record.sku.clone(),
            name: record.name.clone(),
            display_price,
            original_price,
            rating: placeholder_rating(&record.sku),
            image_path: record.image_path.clone(),
            category: record.category.clone(),
            description: record.description.clone(),
            wood_type: record.wood_type.clone(),
            finish: record.finish.clone(),
            dimensions: record.dimensions.clone(),
            weight: record.weight,
            stock: record.stock,
            status: record.status.clone(),
            featured: record.featured,
            is_new: is_recent(record.created_at, now),
            tags: record.tags.clone().unwrap_or_default(),
        }
    }
}

/// Stable stand-in rating in the 4.0..=5.0 band, one decimal of
/// granularity. FNV-1a over the sku rather than a random roll, so
/// repeated transforms of the same record agree.
fn placeholder_rating(sku: &str) -> f32 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in sku.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    4.0 + (hash % 11) as f32 / 10.0
}
