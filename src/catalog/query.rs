// query.rs
use url::form_urlencoded;

use crate::domain::filters::FilterSpec;
use crate::reference::SortKey;

/// Insertion-ordered query parameters with drop-empty semantics.
///
/// The catalog service treats an absent parameter and an empty one the same
/// way, so empty strings and `None` values never make it into the list.
/// Keys keep the order they were pushed in; no sorting, no deduplication.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        self.pairs.push((name.to_string(), value.to_string()));
    }

    pub fn push_opt(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    pub fn push_f64(&mut self, name: &str, value: Option<f64>) {
        if let Some(value) = value {
            self.push(name, &value.to_string());
        }
    }

    pub fn push_u32(&mut self, name: &str, value: Option<u32>) {
        if let Some(value) = value {
            self.push(name, &value.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Render as a percent-encoded `k=v&k=v` string.
    ///
    /// Returns `""` when nothing survived filtering. No leading `?`; the
    /// caller decides whether one is needed, and must not append a bare `?`
    /// for an empty result.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.pairs {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

/// The structured parameter set accepted by the `/products` endpoint.
///
/// Parameter names and values pass through verbatim; range checks on the
/// price bounds are the caller's responsibility, not validated here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub wood_type: Option<String>,
    pub finish: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: Option<SortKey>,
    pub featured: bool,
    /// Free-text name search.
    pub name: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ProductQuery {
    pub fn with_page(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }

    pub fn with_name(mut self, term: &str) -> Self {
        self.name = Some(term.to_string());
        self
    }

    /// Emit parameters in the fixed order the service documents them.
    pub fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("category", self.category.as_deref());
        params.push_opt("wood_type", self.wood_type.as_deref());
        params.push_opt("finish", self.finish.as_deref());
        params.push_f64("min_price", self.min_price);
        params.push_f64("max_price", self.max_price);
        params.push_opt("sort", self.sort.map(SortKey::as_str));
        if self.featured {
            params.push("featured", "true");
        }
        params.push_opt("name", self.name.as_deref());
        params.push_u32("limit", self.limit);
        params.push_u32("offset", self.offset);
        params
    }
}

impl From<&FilterSpec> for ProductQuery {
    fn from(spec: &FilterSpec) -> Self {
        ProductQuery {
            category: spec.category.clone(),
            wood_type: spec.wood_type.clone(),
            finish: spec.finish.clone(),
            min_price: spec.min_price,
            max_price: spec.max_price,
            sort: spec.sort,
            featured: spec.featured_only,
            ..ProductQuery::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_absent_values_are_dropped() {
        let mut params = QueryParams::new();
        params.push("category", "");
        params.push_opt("wood_type", None);
        params.push_f64("min_price", None);
        params.push("sort", "newest");

        assert_eq!(params.pairs(), &[("sort".to_string(), "newest".to_string())]);
        assert_eq!(params.to_query_string(), "sort=newest");
    }

    #[test]
    fn no_surviving_params_render_as_empty_string() {
        let mut params = QueryParams::new();
        params.push("name", "");
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut params = QueryParams::new();
        params.push("b", "2");
        params.push("a", "1");
        params.push("c", "3");
        assert_eq!(params.to_query_string(), "b=2&a=1&c=3");
    }

    #[test]
    fn round_trip_recovers_surviving_pairs() {
        let mut params = QueryParams::new();
        params.push("category", "tv table");
        params.push("name", "50% oak & pine");
        params.push("limit", "20");

        let encoded = params.to_query_string();
        let decoded: Vec<(String, String)> = form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect();

        assert_eq!(decoded, params.pairs());
    }

    #[test]
    fn product_query_emits_fixed_order() {
        let query = ProductQuery {
            category: Some("sofa".to_string()),
            max_price: Some(250.0),
            sort: Some(SortKey::PriceAsc),
            featured: true,
            ..ProductQuery::default()
        }
        .with_page(20, 40);

        assert_eq!(
            query.params().to_query_string(),
            "category=sofa&max_price=250&sort=price_asc&featured=true&limit=20&offset=40"
        );
    }

    #[test]
    fn filter_spec_converts_without_pagination() {
        let spec = FilterSpec {
            wood_type: Some("oak".to_string()),
            min_price: Some(99.5),
            ..FilterSpec::default()
        };
        let query = ProductQuery::from(&spec);
        assert_eq!(query.params().to_query_string(), "wood_type=oak&min_price=99.5");
        assert_eq!(query.limit, None);
        assert_eq!(query.offset, None);
    }
}
