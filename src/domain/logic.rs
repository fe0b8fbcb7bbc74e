// src/domain/logic.rs

use chrono::{DateTime, Duration, Utc};

/// Window inside which a product counts as "new".
const NEW_WINDOW_DAYS: i64 = 30;

/// True when `created_at` falls within the last 30 days of `now`.
pub fn is_recent(created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    created_at > now - Duration::days(NEW_WINDOW_DAYS)
}

/// Price as the screens print it.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Rounded discount percentage, 0 unless both prices are positive and the
/// discount actually lowers the price.
pub fn discount_percent(original: f64, discounted: f64) -> u32 {
    if original <= 0.0 || discounted <= 0.0 || discounted >= original {
        return 0;
    }
    (((original - discounted) / original) * 100.0).round() as u32
}
