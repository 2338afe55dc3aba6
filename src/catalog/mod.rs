//! Catalog types and data provider
//!
//! One typed schema for everything the listing views show. The source data
//! is a seeded in-memory catalog; a real deployment would put a remote
//! provider behind the same trait.

mod provider;
mod seed;
mod types;

pub use provider::{CatalogError, CatalogProvider, StaticCatalog};
pub use types::{Coordinates, Product, Vendor};
