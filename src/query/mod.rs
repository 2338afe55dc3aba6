//! Query state parsing
//!
//! Raw listing parameters arrive as loose strings and numbers from the
//! HTTP layer; everything is validated or clamped here so the pipeline
//! only ever sees well-formed state. Malformed input never errors: an
//! unknown sort key falls back to relevance, out-of-range page numbers
//! clamp to 1.

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Supported sort criteria
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending distance in kilometers
    Distance,
    /// Descending rating
    Rating,
    /// Ascending folded-lexicographic name
    Name,
    /// Descending review count
    Reviews,
    /// Sponsored placement first, then descending rating
    #[default]
    Relevance,
}

impl SortKey {
    /// Parse a sort key, falling back to [`SortKey::Relevance`] on
    /// anything unrecognized.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "distance" => Self::Distance,
            "rating" => Self::Rating,
            "name" => Self::Name,
            "reviews" | "review_count" => Self::Reviews,
            // "sponsored" is the legacy alias the list views used
            "relevance" | "sponsored" => Self::Relevance,
            _ => Self::Relevance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Rating => "rating",
            Self::Name => "name",
            Self::Reviews => "reviews",
            Self::Relevance => "relevance",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated listing query state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryState {
    /// Free-text search, possibly empty
    pub search_text: String,
    /// Active category tag; "all" or empty disables the category filter
    pub category: String,
    /// Sort criterion
    pub sort: SortKey,
    /// Page number, 1-indexed
    pub page: u32,
    /// Items per page
    pub page_size: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: "all".to_string(),
            sort: SortKey::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    /// Build validated state from raw request parameters.
    ///
    /// `page` below 1 clamps to 1; `page_size` clamps into
    /// `1..=max_page_size`.
    pub fn from_params(
        search_text: Option<String>,
        category: Option<String>,
        sort: Option<String>,
        page: Option<i64>,
        page_size: Option<i64>,
        max_page_size: u32,
    ) -> Self {
        let cap = max_page_size.clamp(1, MAX_PAGE_SIZE);

        Self {
            search_text: search_text.unwrap_or_default(),
            category: category.unwrap_or_else(|| "all".to_string()),
            sort: sort.as_deref().map(SortKey::parse).unwrap_or_default(),
            page: clamp_positive(page, 1),
            page_size: clamp_positive(page_size, DEFAULT_PAGE_SIZE.min(cap)).min(cap),
        }
    }

    /// Simple state for a bare text search
    pub fn simple(search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            ..Self::default()
        }
    }

    /// Set the active category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the sort key
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Set the page number (clamped to at least 1)
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Whether this state applies no filtering at all
    pub fn is_unfiltered(&self) -> bool {
        let cat = self.category.trim();
        self.search_text.trim().is_empty() && (cat.is_empty() || cat.eq_ignore_ascii_case("all"))
    }
}

fn clamp_positive(raw: Option<i64>, default: u32) -> u32 {
    match raw {
        Some(n) if n >= 1 => n.min(u32::MAX as i64) as u32,
        Some(_) => 1,
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("distance"), SortKey::Distance);
        assert_eq!(SortKey::parse("  RATING "), SortKey::Rating);
        assert_eq!(SortKey::parse("sponsored"), SortKey::Relevance);
        assert_eq!(SortKey::parse("review_count"), SortKey::Reviews);
    }

    #[test]
    fn test_unknown_sort_key_falls_back_to_relevance() {
        assert_eq!(SortKey::parse("price"), SortKey::Relevance);
        assert_eq!(SortKey::parse(""), SortKey::Relevance);
    }

    #[test]
    fn test_from_params_defaults() {
        let state = QueryState::from_params(None, None, None, None, None, 50);

        assert_eq!(state.search_text, "");
        assert_eq!(state.category, "all");
        assert_eq!(state.sort, SortKey::Relevance);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_from_params_clamps_page_and_size() {
        let state = QueryState::from_params(None, None, None, Some(-3), Some(0), 50);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 1);

        let state = QueryState::from_params(None, None, None, Some(4), Some(500), 50);
        assert_eq!(state.page, 4);
        assert_eq!(state.page_size, 50);
    }

    #[test]
    fn test_is_unfiltered() {
        assert!(QueryState::default().is_unfiltered());
        assert!(QueryState::simple("  ").is_unfiltered());
        assert!(!QueryState::simple("alface").is_unfiltered());
        assert!(!QueryState::default().with_category("verduras").is_unfiltered());
    }
}
