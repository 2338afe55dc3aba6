//! Catalog data providers

use super::seed;
use super::types::{Product, Vendor};
use async_trait::async_trait;
use thiserror::Error;

/// Catalog access errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("vendor {0} not found")]
    VendorNotFound(u32),
    #[error("product {0} not found")]
    ProductNotFound(u32),
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// A source of the full entity collections.
///
/// The pipeline consumes collections already materialized in memory, so a
/// provider returns owned snapshots rather than streaming.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// All vendors
    async fn vendors(&self) -> Result<Vec<Vendor>, CatalogError>;

    /// All products
    async fn products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Single vendor by id
    async fn vendor(&self, id: u32) -> Result<Vendor, CatalogError> {
        self.vendors()
            .await?
            .into_iter()
            .find(|v| v.id == id)
            .ok_or(CatalogError::VendorNotFound(id))
    }

    /// Single product by id
    async fn product(&self, id: u32) -> Result<Product, CatalogError> {
        self.products()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::ProductNotFound(id))
    }
}

/// In-memory catalog seeded with mock data
pub struct StaticCatalog {
    vendors: Vec<Vendor>,
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Catalog with the built-in seed data
    pub fn seeded() -> Self {
        Self {
            vendors: seed::vendors(),
            products: seed::products(),
        }
    }

    /// Catalog over caller-supplied collections
    pub fn new(vendors: Vec<Vendor>, products: Vec<Product>) -> Self {
        Self { vendors, products }
    }

    /// Empty catalog
    pub fn empty() -> Self {
        Self::new(vec![], vec![])
    }

    pub fn vendor_count(&self) -> usize {
        self.vendors.len()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn vendors(&self) -> Result<Vec<Vendor>, CatalogError> {
        Ok(self.vendors.clone())
    }

    async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_catalog_is_populated() {
        let catalog = StaticCatalog::seeded();
        let vendors = catalog.vendors().await.unwrap();
        let products = catalog.products().await.unwrap();

        assert!(!vendors.is_empty());
        assert!(!products.is_empty());
    }

    #[tokio::test]
    async fn test_seed_ids_are_unique_and_products_reference_vendors() {
        let catalog = StaticCatalog::seeded();
        let vendors = catalog.vendors().await.unwrap();
        let products = catalog.products().await.unwrap();

        let mut vendor_ids: Vec<u32> = vendors.iter().map(|v| v.id).collect();
        vendor_ids.sort_unstable();
        vendor_ids.dedup();
        assert_eq!(vendor_ids.len(), vendors.len());

        let mut product_ids: Vec<u32> = products.iter().map(|p| p.id).collect();
        product_ids.sort_unstable();
        product_ids.dedup();
        assert_eq!(product_ids.len(), products.len());

        for product in &products {
            assert!(
                vendor_ids.binary_search(&product.vendor_id).is_ok(),
                "product {} references unknown vendor {}",
                product.id,
                product.vendor_id
            );
        }
    }

    #[tokio::test]
    async fn test_lookup_by_id() {
        let catalog = StaticCatalog::seeded();
        let vendors = catalog.vendors().await.unwrap();
        let first = &vendors[0];

        let found = catalog.vendor(first.id).await.unwrap();
        assert_eq!(found.name, first.name);

        let missing = catalog.vendor(9999).await;
        assert!(matches!(missing, Err(CatalogError::VendorNotFound(9999))));
    }
}
