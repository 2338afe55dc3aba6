//! Usage counters
//!
//! Tracks listing query volume per entity kind and how often a query comes
//! back empty. Read by the stats endpoint.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Entity kinds the listing endpoints serve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingKind {
    Vendors,
    Products,
}

impl ListingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vendors => "vendors",
            Self::Products => "products",
        }
    }
}

/// Global usage counters
pub struct Metrics {
    /// Total listing queries served
    total_queries: AtomicU64,
    /// Queries that matched nothing
    empty_results: AtomicU64,
    /// Queries per entity kind
    kind_queries: RwLock<HashMap<ListingKind, u64>>,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            total_queries: AtomicU64::new(0),
            empty_results: AtomicU64::new(0),
            kind_queries: RwLock::new(HashMap::new()),
        }
    }

    /// Record one listing query and its outcome
    pub fn record_query(&self, kind: ListingKind, result_count: usize) {
        self.total_queries.fetch_add(1, Ordering::Relaxed);
        if result_count == 0 {
            self.empty_results.fetch_add(1, Ordering::Relaxed);
        }

        let mut per_kind = self.kind_queries.write().unwrap();
        *per_kind.entry(kind).or_insert(0) += 1;
    }

    pub fn total_queries(&self) -> u64 {
        self.total_queries.load(Ordering::Relaxed)
    }

    pub fn empty_results(&self) -> u64 {
        self.empty_results.load(Ordering::Relaxed)
    }

    pub fn queries_for(&self, kind: ListingKind) -> u64 {
        *self.kind_queries.read().unwrap().get(&kind).unwrap_or(&0)
    }

    /// Counters keyed by kind name, for the stats endpoint
    pub fn by_kind(&self) -> HashMap<String, u64> {
        self.kind_queries
            .read()
            .unwrap()
            .iter()
            .map(|(kind, count)| (kind.as_str().to_string(), *count))
            .collect()
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
