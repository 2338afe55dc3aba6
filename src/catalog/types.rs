//! Entity type definitions

use crate::pipeline::Queryable;
use serde::{Deserialize, Serialize};

/// Geographic coordinates (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A market vendor (stall, producer, or shop)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    /// Unique vendor id
    pub id: u32,
    /// Display name
    pub name: String,
    /// Short description shown on the vendor card
    pub description: String,
    /// Category tags (e.g. "hortifruti", "laticinios")
    pub categories: Vec<String>,
    /// Neighborhood the stall sits in
    pub neighborhood: String,
    /// City
    pub city: String,
    /// Stall coordinates, when known
    pub coordinates: Option<Coordinates>,
    /// Average review rating, 0.0 to 5.0
    pub rating: f32,
    /// Number of reviews behind the rating
    pub review_count: u32,
    /// Distance from the caller in kilometers
    pub distance_km: f32,
    /// Paid placement flag; sponsored vendors always list first
    pub is_sponsored: bool,
    /// Whether the stall is currently open
    pub is_open: bool,
    /// Contact phone, digits only with country code (for WhatsApp links)
    pub phone: String,
}

impl Queryable for Vendor {
    fn entity_id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }

    fn location_terms(&self) -> Vec<&str> {
        vec![&self.neighborhood, &self.city]
    }

    fn rating(&self) -> f32 {
        self.rating
    }

    fn review_count(&self) -> u32 {
        self.review_count
    }

    fn distance_km(&self) -> f32 {
        self.distance_km
    }

    fn is_sponsored(&self) -> bool {
        self.is_sponsored
    }
}

/// A product offered by a vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id
    pub id: u32,
    /// Display name
    pub name: String,
    /// Owning vendor id
    pub vendor_id: u32,
    /// Owning vendor name, denormalized for the product card
    pub vendor_name: String,
    /// Category tags
    pub categories: Vec<String>,
    /// Price in cents of the local currency
    pub price_cents: u32,
    /// Sales unit ("kg", "unidade", "maço", ...)
    pub unit: String,
    /// Average review rating, 0.0 to 5.0
    pub rating: f32,
    /// Number of reviews behind the rating
    pub review_count: u32,
    /// Distance to the owning vendor in kilometers
    pub distance_km: f32,
    /// Paid placement flag
    pub is_sponsored: bool,
    /// Whether the product is in stock
    pub available: bool,
}

impl Queryable for Product {
    fn entity_id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }

    fn location_terms(&self) -> Vec<&str> {
        vec![&self.vendor_name]
    }

    fn rating(&self) -> f32 {
        self.rating
    }

    fn review_count(&self) -> u32 {
        self.review_count
    }

    fn distance_km(&self) -> f32 {
        self.distance_km
    }

    fn is_sponsored(&self) -> bool {
        self.is_sponsored
    }
}
