//! Storefront core for a furniture catalog: the HTTP catalog client, the
//! display transform, and the search/list controllers the screens drive.
//!
//! Screens, navigation, and styling live with the embedding app; this
//! crate owns everything between a user gesture and a rendered list.

pub mod catalog;
pub mod controllers;
pub mod domain;
pub mod reference;

pub use catalog::client::{CatalogApi, CatalogClient, ClientConfig};
pub use catalog::models::{ApiEnvelope, CatalogRecord};
pub use catalog::query::{ProductQuery, QueryParams};
pub use catalog::{CatalogError, CatalogResult};
pub use controllers::list::{ListController, ListStatus, PageState};
pub use controllers::search::{SearchController, SearchPhase};
pub use domain::filters::FilterSpec;
pub use domain::product::Product;
pub use reference::SortKey;

#[cfg(test)]
mod tests;
