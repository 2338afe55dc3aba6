//! Mercado-RS: a local-market storefront listing service
//!
//! This is the main entry point for the application.

use anyhow::Result;
use mercado_rs::{
    catalog::StaticCatalog,
    config::Settings,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    info!("Starting Mercado-RS v{}", mercado_rs::VERSION);

    // Load configuration
    let settings = load_settings()?;
    info!(
        "Loaded configuration for instance: {}",
        settings.general.instance_name
    );

    // Build the catalog
    let catalog = if settings.catalog.use_seed {
        Arc::new(StaticCatalog::seeded())
    } else {
        Arc::new(StaticCatalog::empty())
    };
    info!(
        "Catalog ready: {} vendors, {} products",
        catalog.vendor_count(),
        catalog.product_count()
    );

    // Create application state
    let state = AppState::new(settings.clone(), catalog);

    // Create router
    let app = create_router(state);

    // Bind address
    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Check environment variable first
    if let Ok(path) = std::env::var("MERCADO_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Try each default path
    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/mercado/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("mercado-rs/settings.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
