//! Settings structures for Mercado-RS configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::query::SortKey;
use crate::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Main settings structure, loaded from `settings.yml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub listing: ListingSettings,
    pub catalog: CatalogSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (MERCADO_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("MERCADO_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("MERCADO_SECRET_KEY") {
            self.server.secret_key = val;
        }
        if let Ok(val) = std::env::var("MERCADO_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("MERCADO_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("MERCADO_PAGE_SIZE") {
            if let Ok(size) = val.parse::<u32>() {
                self.listing.default_page_size = size.clamp(1, self.listing.max_page_size);
            }
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug mode
    pub debug: bool,
    /// Instance name displayed to clients
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Mercado".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Secret key for session tokens
    pub secret_key: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8787,
            bind_address: "127.0.0.1".to_string(),
            secret_key: generate_secret_key(),
        }
    }
}

/// Listing behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSettings {
    /// Page size used when the client sends none
    pub default_page_size: u32,
    /// Largest page size a client may request
    pub max_page_size: u32,
    /// Sort applied when the client sends none
    pub default_sort: SortKey,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            default_sort: SortKey::Relevance,
        }
    }
}

/// Catalog source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Serve the built-in seed data (the only source for now)
    pub use_seed: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { use_seed: true }
    }
}

/// Generate a random secret key
fn generate_secret_key() -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..32)
        .map(|_| rng.sample(rand::distributions::Alphanumeric) as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8787);
        assert!(!settings.general.debug);
        assert!(settings.catalog.use_seed);
        assert_eq!(settings.listing.default_page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(settings.server.secret_key.len(), 32);
    }

    #[test]
    fn test_settings_from_yaml() {
        let yaml = r#"
general:
  instance_name: "Feira da Vila"
server:
  port: 9000
listing:
  default_page_size: 6
  default_sort: distance
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.general.instance_name, "Feira da Vila");
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.listing.default_page_size, 6);
        assert_eq!(settings.listing.default_sort, SortKey::Distance);
        // Unspecified sections keep their defaults
        assert_eq!(settings.listing.max_page_size, MAX_PAGE_SIZE);
    }
}
