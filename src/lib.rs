//! Mercado-RS: a local-market storefront listing service written in Rust
//!
//! Vendors and products from a local farmers market are browsed, searched,
//! filtered, sorted, and paginated through a pure listing pipeline, served
//! over a JSON HTTP API.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod geo;
pub mod metrics;
pub mod pipeline;
pub mod query;
pub mod session;
pub mod web;

pub use catalog::{CatalogProvider, Product, StaticCatalog, Vendor};
pub use config::Settings;
pub use pipeline::{run_pipeline, Page, Queryable};
pub use query::{QueryState, SortKey};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of items per listing page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Hard upper bound on the page size a client may request
pub const MAX_PAGE_SIZE: u32 = 100;
