//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // The consumer is a browser front end on another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Listing routes
        .route("/", get(handlers::index))
        .route("/vendors", get(handlers::list_vendors))
        .route("/vendors/:id", get(handlers::get_vendor))
        .route("/vendors/:id/contact", get(handlers::vendor_contact))
        .route("/products", get(handlers::list_products))
        .route("/products/:id", get(handlers::get_product))
        .route("/categories", get(handlers::categories))
        // Session routes
        .route("/auth/login", post(handlers::login))
        .route("/auth/logout", post(handlers::logout))
        .route("/auth/me", get(handlers::me))
        // Operational routes
        .route("/stats", get(handlers::stats))
        .route("/health", get(handlers::health))
        // Add middleware
        .layer(cors)
        // Add state
        .with_state(state)
}
