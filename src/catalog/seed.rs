//! Built-in mock catalog data
//!
//! Stands in for the remote catalog a real deployment would query. The
//! collections stay small enough to read but wide enough to exercise every
//! filter and sort path (sponsored entities, closed stalls, out-of-stock
//! products, accented names).

use super::types::{Coordinates, Product, Vendor};

#[allow(clippy::too_many_arguments)]
fn vendor(
    id: u32,
    name: &str,
    description: &str,
    categories: &[&str],
    neighborhood: &str,
    coordinates: Option<Coordinates>,
    rating: f32,
    review_count: u32,
    distance_km: f32,
    is_sponsored: bool,
    is_open: bool,
    phone: &str,
) -> Vendor {
    Vendor {
        id,
        name: name.to_string(),
        description: description.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        neighborhood: neighborhood.to_string(),
        city: "São Paulo".to_string(),
        coordinates,
        rating,
        review_count,
        distance_km,
        is_sponsored,
        is_open,
        phone: phone.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    vendor_id: u32,
    vendor_name: &str,
    categories: &[&str],
    price_cents: u32,
    unit: &str,
    rating: f32,
    review_count: u32,
    distance_km: f32,
    is_sponsored: bool,
    available: bool,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        vendor_id,
        vendor_name: vendor_name.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        price_cents,
        unit: unit.to_string(),
        rating,
        review_count,
        distance_km,
        is_sponsored,
        available,
    }
}

/// Seed vendors
pub fn vendors() -> Vec<Vendor> {
    vec![
        vendor(
            1,
            "Barraca do Zé",
            "Hortifrúti direto do produtor, colhido de madrugada",
            &["hortifruti", "verduras"],
            "Vila Madalena",
            Some(Coordinates::new(-23.5505, -46.6913)),
            4.7,
            182,
            0.8,
            true,
            true,
            "5511987650001",
        ),
        vendor(
            2,
            "Sítio das Águas Claras",
            "Orgânicos certificados e ovos caipira",
            &["organicos", "hortifruti"],
            "Pinheiros",
            Some(Coordinates::new(-23.5614, -46.7020)),
            4.9,
            97,
            2.3,
            false,
            true,
            "5511987650002",
        ),
        vendor(
            3,
            "Queijaria Serra Azul",
            "Queijos artesanais de leite cru",
            &["laticinios"],
            "Perdizes",
            Some(Coordinates::new(-23.5366, -46.6731)),
            4.8,
            251,
            3.1,
            false,
            false,
            "5511987650003",
        ),
        vendor(
            4,
            "Peixaria do Cais",
            "Peixe fresco todas as terças e sextas",
            &["pescados"],
            "Lapa",
            Some(Coordinates::new(-23.5280, -46.7045)),
            4.3,
            64,
            4.6,
            false,
            true,
            "5511987650004",
        ),
        vendor(
            5,
            "Empório Dona Cida",
            "Temperos, grãos e farinhas a granel",
            &["emporio", "graos"],
            "Vila Madalena",
            None,
            4.5,
            143,
            1.1,
            true,
            true,
            "5511987650005",
        ),
        vendor(
            6,
            "Flores da Cantareira",
            "Flores de corte e mudas",
            &["flores"],
            "Santana",
            Some(Coordinates::new(-23.5015, -46.6256)),
            4.1,
            38,
            7.9,
            false,
            true,
            "5511987650006",
        ),
    ]
}

/// Seed products
pub fn products() -> Vec<Product> {
    vec![
        product(
            1,
            "Alface Hidropônica",
            1,
            "Barraca do Zé",
            &["verduras", "hortifruti"],
            450,
            "unidade",
            4.6,
            88,
            0.8,
            false,
            true,
        ),
        product(
            2,
            "Tomate Italiano",
            1,
            "Barraca do Zé",
            &["legumes", "hortifruti"],
            890,
            "kg",
            4.4,
            57,
            0.8,
            true,
            true,
        ),
        product(
            3,
            "Ovos Caipira (dúzia)",
            2,
            "Sítio das Águas Claras",
            &["organicos"],
            1600,
            "dúzia",
            4.9,
            120,
            2.3,
            false,
            true,
        ),
        product(
            4,
            "Rúcula Orgânica",
            2,
            "Sítio das Águas Claras",
            &["verduras", "organicos"],
            520,
            "maço",
            4.7,
            43,
            2.3,
            false,
            false,
        ),
        product(
            5,
            "Queijo Canastra Meia Cura",
            3,
            "Queijaria Serra Azul",
            &["laticinios"],
            5200,
            "peça",
            4.9,
            203,
            3.1,
            true,
            true,
        ),
        product(
            6,
            "Manteiga de Garrafa",
            3,
            "Queijaria Serra Azul",
            &["laticinios"],
            2800,
            "garrafa",
            4.5,
            61,
            3.1,
            false,
            true,
        ),
        product(
            7,
            "Tilápia Fresca",
            4,
            "Peixaria do Cais",
            &["pescados"],
            3400,
            "kg",
            4.2,
            29,
            4.6,
            false,
            true,
        ),
        product(
            8,
            "Açafrão-da-terra Moído",
            5,
            "Empório Dona Cida",
            &["temperos", "emporio"],
            980,
            "100g",
            4.6,
            74,
            1.1,
            false,
            true,
        ),
        product(
            9,
            "Feijão Carioca a Granel",
            5,
            "Empório Dona Cida",
            &["graos", "emporio"],
            1150,
            "kg",
            4.3,
            52,
            1.1,
            false,
            true,
        ),
        product(
            10,
            "Girassol (maço)",
            6,
            "Flores da Cantareira",
            &["flores"],
            2200,
            "maço",
            4.0,
            17,
            7.9,
            false,
            true,
        ),
    ]
}
