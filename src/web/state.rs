//! Application state shared across handlers

use crate::catalog::CatalogProvider;
use crate::config::Settings;
use crate::metrics::Metrics;
use crate::session::SessionStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Catalog data source
    pub catalog: Arc<dyn CatalogProvider>,
    /// Session store
    pub sessions: Arc<SessionStore>,
    /// Usage counters
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, catalog: Arc<dyn CatalogProvider>) -> Self {
        let sessions = Arc::new(SessionStore::new(&settings.server.secret_key));

        Self {
            settings: Arc::new(settings),
            catalog,
            sessions,
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
