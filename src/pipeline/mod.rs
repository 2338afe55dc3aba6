//! The listing pipeline: filter → sort → paginate
//!
//! A pure, synchronous transformation from a full entity collection and a
//! [`QueryState`] to the visible page of results. The pipeline holds no
//! state of its own and is re-run wholesale on every query change; output
//! is always an order-preserved subset of the input.

use crate::query::{QueryState, SortKey};
use serde::Serialize;
use std::cmp::Ordering;

/// Field mapping the pipeline needs from an entity.
///
/// `Vendor` and `Product` both implement this, which is what lets one
/// pipeline serve every list view.
pub trait Queryable {
    /// Unique entity id
    fn entity_id(&self) -> u32;
    /// Display name, matched by text search and used for name sort
    fn name(&self) -> &str;
    /// Category tags, matched by text search and the category filter
    fn categories(&self) -> &[String];
    /// Location fields matched by text search (neighborhood, city, ...)
    fn location_terms(&self) -> Vec<&str>;
    /// Average rating, 0.0 to 5.0
    fn rating(&self) -> f32;
    /// Review count behind the rating
    fn review_count(&self) -> u32;
    /// Distance from the caller in kilometers
    fn distance_km(&self) -> f32;
    /// Paid placement flag; sponsored entities always sort first
    fn is_sponsored(&self) -> bool;
}

/// One page of pipeline output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Entities visible through the requested page (cumulative)
    pub items: Vec<T>,
    /// Whether more entities exist beyond this page
    pub has_more: bool,
    /// Total entities after filtering, before pagination
    pub total: usize,
}

/// Run the full pipeline: text filter → category filter → sort → paginate.
pub fn run_pipeline<T: Queryable + Clone>(entities: &[T], state: &QueryState) -> Page<T> {
    let mut kept: Vec<&T> = filter_by_text(entities, &state.search_text);
    kept = filter_by_category(kept, &state.category);
    sort(&mut kept, state.sort);
    paginate(kept, state.page, state.page_size)
}

/// Case-insensitive, diacritic-folded substring match against name,
/// category tags, and location fields. Whitespace-only text is the
/// identity.
pub fn filter_by_text<'a, T: Queryable>(entities: &'a [T], search_text: &str) -> Vec<&'a T> {
    let needle = fold(search_text.trim());
    if needle.is_empty() {
        return entities.iter().collect();
    }

    entities
        .iter()
        .filter(|e| {
            fold(e.name()).contains(&needle)
                || e.categories().iter().any(|c| fold(c).contains(&needle))
                || e.location_terms().iter().any(|t| fold(t).contains(&needle))
        })
        .collect()
}

/// Keep entities whose category set contains `category`. The `"all"` and
/// empty-string sentinels disable the filter.
pub fn filter_by_category<'a, T: Queryable>(entities: Vec<&'a T>, category: &str) -> Vec<&'a T> {
    let wanted = fold(category.trim());
    if wanted.is_empty() || wanted == "all" {
        return entities;
    }

    entities
        .into_iter()
        .filter(|e| e.categories().iter().any(|c| fold(c) == wanted))
        .collect()
}

/// Stable sort under `key`, with sponsored-first applied before any key:
/// whenever two entities differ in `is_sponsored`, the sponsored one wins
/// regardless of the requested criterion.
pub fn sort<T: Queryable>(entities: &mut [&T], key: SortKey) {
    entities.sort_by(|a, b| {
        match (b.is_sponsored(), a.is_sponsored()) {
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            _ => {}
        }
        compare_by_key(*a, *b, key)
    });
}

fn compare_by_key<T: Queryable>(a: &T, b: &T, key: SortKey) -> Ordering {
    match key {
        SortKey::Distance => a
            .distance_km()
            .partial_cmp(&b.distance_km())
            .unwrap_or(Ordering::Equal),
        SortKey::Rating => b
            .rating()
            .partial_cmp(&a.rating())
            .unwrap_or(Ordering::Equal),
        SortKey::Name => fold(a.name()).cmp(&fold(b.name())),
        SortKey::Reviews => b.review_count().cmp(&a.review_count()),
        // Within a sponsorship band, relevance is rating-descending
        SortKey::Relevance => b
            .rating()
            .partial_cmp(&a.rating())
            .unwrap_or(Ordering::Equal),
    }
}

/// Cumulative "load more" pagination: everything up to and including the
/// requested page. `page` and `page_size` are clamped to at least 1.
pub fn paginate<T: Queryable + Clone>(entities: Vec<&T>, page: u32, page_size: u32) -> Page<T> {
    let total = entities.len();
    let visible = page.max(1) as usize * page_size.max(1) as usize;

    Page {
        items: entities.into_iter().take(visible).cloned().collect(),
        has_more: total > visible,
        total,
    }
}

/// Lowercase and strip the Latin diacritics common in pt-BR names, so
/// "hidroponica" matches "Hidropônica" and "Água" sorts next to "agua".
pub(crate) fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Vendor;
    use crate::query::QueryState;

    fn vendor(id: u32, name: &str, rating: f32, sponsored: bool) -> Vendor {
        Vendor {
            id,
            name: name.to_string(),
            description: String::new(),
            categories: vec!["hortifruti".to_string()],
            neighborhood: "Centro".to_string(),
            city: "São Paulo".to_string(),
            coordinates: None,
            rating,
            review_count: id * 10,
            distance_km: id as f32,
            is_sponsored: sponsored,
            is_open: true,
            phone: "5511999990000".to_string(),
        }
    }

    fn state(sort: SortKey) -> QueryState {
        QueryState {
            search_text: String::new(),
            category: "all".to_string(),
            sort,
            page: 1,
            page_size: 10,
        }
    }

    #[test]
    fn test_empty_text_is_identity() {
        let vendors = vec![vendor(1, "Banana", 4.5, false), vendor(2, "Apple", 4.9, true)];

        let filtered = filter_by_text(&vendors, "");
        assert_eq!(filtered.len(), 2);

        let filtered = filter_by_text(&vendors, "   ");
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_text_match_is_case_insensitive_substring() {
        let vendors = vec![vendor(1, "Alface Hidropônica", 4.5, false)];

        assert_eq!(filter_by_text(&vendors, "lface").len(), 1);
        assert_eq!(filter_by_text(&vendors, "HIDRO").len(), 1);
        assert_eq!(filter_by_text(&vendors, "hidroponica").len(), 1);
        assert_eq!(filter_by_text(&vendors, "tomate").len(), 0);
    }

    #[test]
    fn test_text_matches_category_and_location() {
        let vendors = vec![vendor(1, "Barraca do Zé", 4.5, false)];

        assert_eq!(filter_by_text(&vendors, "hortifruti").len(), 1);
        assert_eq!(filter_by_text(&vendors, "são paulo").len(), 1);
    }

    #[test]
    fn test_category_sentinel_disables_filter() {
        let vendors = vec![vendor(1, "A", 4.0, false), vendor(2, "B", 4.0, false)];
        let refs: Vec<&Vendor> = vendors.iter().collect();

        assert_eq!(filter_by_category(refs.clone(), "all").len(), 2);
        assert_eq!(filter_by_category(refs.clone(), "").len(), 2);
        assert_eq!(filter_by_category(refs.clone(), "hortifruti").len(), 2);
        assert_eq!(filter_by_category(refs, "laticinios").len(), 0);
    }

    #[test]
    fn test_sponsored_always_sorts_first() {
        let vendors = vec![
            vendor(1, "Banana", 4.5, false),
            vendor(2, "Apple", 4.9, true),
        ];

        for key in [
            SortKey::Distance,
            SortKey::Rating,
            SortKey::Name,
            SortKey::Reviews,
            SortKey::Relevance,
        ] {
            let mut refs: Vec<&Vendor> = vendors.iter().collect();
            sort(&mut refs, key);
            assert_eq!(refs[0].id, 2, "sponsored must lead under {:?}", key);

            for pair in refs.windows(2) {
                assert!(
                    pair[0].is_sponsored() || !pair[1].is_sponsored(),
                    "non-sponsored entity precedes a sponsored one under {:?}",
                    key
                );
            }
        }
    }

    #[test]
    fn test_sort_keys() {
        let vendors = vec![
            vendor(3, "Carambola", 3.0, false),
            vendor(1, "Abacaxi", 5.0, false),
            vendor(2, "Banana", 4.0, false),
        ];
        let ids = |refs: &[&Vendor]| refs.iter().map(|v| v.id).collect::<Vec<_>>();

        let mut refs: Vec<&Vendor> = vendors.iter().collect();
        sort(&mut refs, SortKey::Distance);
        assert_eq!(ids(&refs), vec![1, 2, 3]);

        let mut refs: Vec<&Vendor> = vendors.iter().collect();
        sort(&mut refs, SortKey::Rating);
        assert_eq!(ids(&refs), vec![1, 2, 3]);

        let mut refs: Vec<&Vendor> = vendors.iter().collect();
        sort(&mut refs, SortKey::Name);
        assert_eq!(ids(&refs), vec![1, 2, 3]);

        let mut refs: Vec<&Vendor> = vendors.iter().collect();
        sort(&mut refs, SortKey::Reviews);
        assert_eq!(ids(&refs), vec![3, 2, 1]);
    }

    #[test]
    fn test_name_sort_folds_diacritics() {
        let vendors = vec![
            vendor(1, "Érica Temperos", 4.0, false),
            vendor(2, "Zeca Frutas", 4.0, false),
        ];

        let mut refs: Vec<&Vendor> = vendors.iter().collect();
        sort(&mut refs, SortKey::Name);
        assert_eq!(refs[0].id, 1);
    }

    #[test]
    fn test_paginate_cumulative_load_more() {
        let vendors: Vec<Vendor> = (1..=5).map(|i| vendor(i, "V", 4.0, false)).collect();

        let page = paginate(vendors.iter().collect(), 1, 2);
        assert_eq!(page.items.len(), 2);
        assert!(page.has_more);
        assert_eq!(page.total, 5);

        let page = paginate(vendors.iter().collect(), 2, 2);
        assert_eq!(page.items.len(), 4);
        assert!(page.has_more);

        // Page past the end clamps to the full collection
        let page = paginate(vendors.iter().collect(), 3, 2);
        assert_eq!(page.items.len(), 5);
        assert!(!page.has_more);
    }

    #[test]
    fn test_paginate_is_monotonic_prefix() {
        let vendors: Vec<Vendor> = (1..=7).map(|i| vendor(i, "V", 4.0, false)).collect();

        let mut previous: Vec<u32> = vec![];
        for page_no in 1..=4 {
            let page = paginate(vendors.iter().collect(), page_no, 2);
            let ids: Vec<u32> = page.items.iter().map(|v| v.id).collect();
            assert_eq!(&ids[..previous.len()], previous.as_slice());
            previous = ids;
        }
    }

    #[test]
    fn test_paginate_clamps_zero_page() {
        let vendors: Vec<Vendor> = (1..=3).map(|i| vendor(i, "V", 4.0, false)).collect();

        let page = paginate(vendors.iter().collect(), 0, 0);
        assert_eq!(page.items.len(), 1);
        assert!(page.has_more);
    }

    #[test]
    fn test_empty_input_yields_empty_page() {
        let vendors: Vec<Vendor> = vec![];
        let page = run_pipeline(&vendors, &state(SortKey::Relevance));

        assert!(page.items.is_empty());
        assert!(!page.has_more);
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let vendors = vec![
            vendor(1, "Banana da Terra", 4.5, false),
            vendor(2, "Abacate Manteiga", 4.9, true),
            vendor(3, "Alface Hidropônica", 4.2, false),
        ];
        let query = QueryState {
            search_text: "a".to_string(),
            category: "hortifruti".to_string(),
            sort: SortKey::Rating,
            page: 1,
            page_size: 2,
        };

        let first = run_pipeline(&vendors, &query);
        let second = run_pipeline(&vendors, &query);
        assert_eq!(first, second);
    }

    #[test]
    fn test_output_is_subset_of_input() {
        let vendors = vec![
            vendor(1, "Banana", 4.5, false),
            vendor(2, "Apple", 4.9, true),
            vendor(3, "Alface", 4.2, false),
        ];

        let page = run_pipeline(&vendors, &state(SortKey::Name));
        assert!(page.items.len() <= vendors.len());
        for item in &page.items {
            assert_eq!(vendors.iter().filter(|v| v.id == item.id).count(), 1);
        }
        // No duplicates in the output either
        let mut ids: Vec<u32> = page.items.iter().map(|v| v.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), page.items.len());
    }
}
