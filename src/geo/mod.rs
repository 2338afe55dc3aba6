//! Geographic distance helpers
//!
//! When a request carries the caller's position, seeded distances are
//! replaced with great-circle distances to each vendor's stall.

use crate::catalog::{Coordinates, Product, Vendor};
use std::collections::HashMap;

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle (haversine) distance between two points in kilometers
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Recompute vendor distances from the caller's position.
///
/// Vendors without coordinates keep their seeded distance.
pub fn localize_vendors(vendors: &mut [Vendor], origin: Coordinates) {
    for vendor in vendors.iter_mut() {
        if let Some(coords) = vendor.coordinates {
            vendor.distance_km = haversine_km(origin, coords) as f32;
        }
    }
}

/// Recompute product distances from their vendors' localized distances.
pub fn localize_products(products: &mut [Product], vendors: &[Vendor]) {
    let by_id: HashMap<u32, f32> = vendors.iter().map(|v| (v.id, v.distance_km)).collect();
    for product in products.iter_mut() {
        if let Some(distance) = by_id.get(&product.vendor_id) {
            product.distance_km = *distance;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::CatalogProvider;

    #[test]
    fn test_haversine_zero_for_same_point() {
        let p = Coordinates::new(-23.5505, -46.6333);
        assert!(haversine_km(p, p) < 1e-9);
    }

    #[test]
    fn test_haversine_known_distance() {
        // São Paulo (Sé) to Campinas center, roughly 88 km
        let sp = Coordinates::new(-23.5505, -46.6333);
        let campinas = Coordinates::new(-22.9056, -47.0608);

        let d = haversine_km(sp, campinas);
        assert!((80.0..95.0).contains(&d), "got {}", d);
    }

    #[tokio::test]
    async fn test_localize_keeps_vendors_without_coordinates() {
        let catalog = StaticCatalog::seeded();
        let mut vendors = catalog.vendors().await.unwrap();
        let unlocated: Vec<(u32, f32)> = vendors
            .iter()
            .filter(|v| v.coordinates.is_none())
            .map(|v| (v.id, v.distance_km))
            .collect();
        assert!(!unlocated.is_empty(), "seed needs a vendor without coords");

        localize_vendors(&mut vendors, Coordinates::new(-23.55, -46.63));

        for (id, seeded) in unlocated {
            let vendor = vendors.iter().find(|v| v.id == id).unwrap();
            assert_eq!(vendor.distance_km, seeded);
        }
    }

    #[tokio::test]
    async fn test_products_follow_vendor_distance() {
        let catalog = StaticCatalog::seeded();
        let mut vendors = catalog.vendors().await.unwrap();
        let mut products = catalog.products().await.unwrap();

        localize_vendors(&mut vendors, Coordinates::new(-23.55, -46.63));
        localize_products(&mut products, &vendors);

        for product in &products {
            let vendor = vendors.iter().find(|v| v.id == product.vendor_id).unwrap();
            assert_eq!(product.distance_km, vendor.distance_km);
        }
    }
}
