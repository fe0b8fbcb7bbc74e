use crate::reference::SortKey;

/// The selection a filter sheet hands back: every field independently
/// optional, none mutually exclusive. Value type: build a new one per
/// change rather than mutating in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub category: Option<String>,
    pub wood_type: Option<String>,
    pub finish: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: Option<SortKey>,
    pub featured_only: bool,
}

impl FilterSpec {
    pub fn for_category(token: &str) -> Self {
        FilterSpec {
            category: Some(token.to_string()),
            ..FilterSpec::default()
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        *self == FilterSpec::default()
    }
}
