//! HTTP request handlers

use super::state::AppState;
use crate::catalog::{CatalogError, Coordinates};
use crate::config::ListingSettings;
use crate::contact;
use crate::geo;
use crate::metrics::ListingKind;
use crate::pipeline::{run_pipeline, Page, Queryable};
use crate::query::QueryState;
use crate::session::SessionError;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Query parameters for the listing endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    /// Free-text search
    pub q: Option<String>,
    /// Active category tag ("all" disables)
    pub category: Option<String>,
    /// Sort key (distance, rating, name, reviews, relevance)
    pub sort: Option<String>,
    /// Page number, 1-indexed
    pub page: Option<i64>,
    /// Items per page
    pub page_size: Option<i64>,
    /// Caller latitude, for distance recomputation
    pub lat: Option<f64>,
    /// Caller longitude
    pub lon: Option<f64>,
}

impl ListingParams {
    fn origin(&self) -> Option<Coordinates> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }
}

/// Listing response envelope
#[derive(Debug, Serialize)]
pub struct ListingResponse<T> {
    /// The validated query state this page answers
    pub query: QueryState,
    /// Total entities after filtering, before pagination
    pub total: usize,
    /// Entities in this page
    pub count: usize,
    /// Whether a further page exists
    pub has_more: bool,
    pub items: Vec<T>,
}

impl<T> ListingResponse<T> {
    fn new(query: QueryState, page: Page<T>) -> Self {
        Self {
            query,
            total: page.total,
            count: page.items.len(),
            has_more: page.has_more,
            items: page.items,
        }
    }
}

/// Build validated query state, letting configured listing defaults stand
/// in for absent parameters.
fn query_state(params: &ListingParams, listing: &ListingSettings) -> QueryState {
    let mut state = QueryState::from_params(
        params.q.clone(),
        params.category.clone(),
        params.sort.clone(),
        params.page,
        params.page_size,
        listing.max_page_size,
    );

    if params.sort.is_none() {
        state.sort = listing.default_sort;
    }
    if params.page_size.is_none() {
        state.page_size = listing.default_page_size.clamp(1, listing.max_page_size.max(1));
    }

    state
}

fn catalog_error(err: CatalogError) -> Response {
    let status = match err {
        CatalogError::VendorNotFound(_) | CatalogError::ProductNotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json(serde_json::json!({ "error": err.to_string() }))).into_response()
}

/// Instance info
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "instance_name": state.instance_name(),
        "version": crate::VERSION,
    }))
}

/// Vendor listing
pub async fn list_vendors(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Response {
    let mut vendors = match state.catalog.vendors().await {
        Ok(vendors) => vendors,
        Err(e) => return catalog_error(e),
    };

    if let Some(origin) = params.origin() {
        geo::localize_vendors(&mut vendors, origin);
    }

    let query = query_state(&params, &state.settings.listing);
    debug!("vendor listing: {:?}", query);

    let page = run_pipeline(&vendors, &query);
    state.metrics.record_query(ListingKind::Vendors, page.total);

    Json(ListingResponse::new(query, page)).into_response()
}

/// Product listing
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Response {
    let mut products = match state.catalog.products().await {
        Ok(products) => products,
        Err(e) => return catalog_error(e),
    };

    if let Some(origin) = params.origin() {
        match state.catalog.vendors().await {
            Ok(mut vendors) => {
                geo::localize_vendors(&mut vendors, origin);
                geo::localize_products(&mut products, &vendors);
            }
            Err(e) => return catalog_error(e),
        }
    }

    let query = query_state(&params, &state.settings.listing);
    debug!("product listing: {:?}", query);

    let page = run_pipeline(&products, &query);
    state.metrics.record_query(ListingKind::Products, page.total);

    Json(ListingResponse::new(query, page)).into_response()
}

/// Vendor detail
pub async fn get_vendor(State(state): State<AppState>, Path(id): Path<u32>) -> Response {
    match state.catalog.vendor(id).await {
        Ok(vendor) => Json(vendor).into_response(),
        Err(e) => catalog_error(e),
    }
}

/// Product detail
pub async fn get_product(State(state): State<AppState>, Path(id): Path<u32>) -> Response {
    match state.catalog.product(id).await {
        Ok(product) => Json(product).into_response(),
        Err(e) => catalog_error(e),
    }
}

/// Query parameters for the contact endpoint
#[derive(Debug, Deserialize)]
pub struct ContactParams {
    /// Message to pre-fill; defaults to a greeting naming the vendor
    pub text: Option<String>,
}

/// WhatsApp deep link for a vendor
pub async fn vendor_contact(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Query(params): Query<ContactParams>,
) -> Response {
    let vendor = match state.catalog.vendor(id).await {
        Ok(vendor) => vendor,
        Err(e) => return catalog_error(e),
    };

    let message = params
        .text
        .unwrap_or_else(|| contact::default_greeting(&vendor.name));
    let link = contact::whatsapp_link(&vendor.phone, &message);

    Json(serde_json::json!({
        "vendor_id": vendor.id,
        "vendor_name": vendor.name,
        "link": link,
    }))
    .into_response()
}

/// Distinct category tags per entity kind
pub async fn categories(State(state): State<AppState>) -> Response {
    let vendors = match state.catalog.vendors().await {
        Ok(vendors) => vendors,
        Err(e) => return catalog_error(e),
    };
    let products = match state.catalog.products().await {
        Ok(products) => products,
        Err(e) => return catalog_error(e),
    };

    Json(serde_json::json!({
        "vendors": distinct_categories(&vendors),
        "products": distinct_categories(&products),
    }))
    .into_response()
}

fn distinct_categories<T: Queryable>(entities: &[T]) -> Vec<String> {
    let mut tags: Vec<String> = entities
        .iter()
        .flat_map(|e| e.categories().iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub phone: String,
}

/// Start a session
pub async fn login(State(state): State<AppState>, Json(body): Json<LoginRequest>) -> Response {
    let name = body.name.trim();
    if name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "name must not be empty" })),
        )
            .into_response();
    }

    let (token, session) = state.sessions.mint(name, body.phone.trim());
    debug!("session {} minted for {}", session.id, session.user_name);

    Json(serde_json::json!({ "token": token, "session": session })).into_response()
}

/// End the current session
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match bearer_token(&headers) {
        Some(token) if state.sessions.revoke(token) => StatusCode::NO_CONTENT.into_response(),
        _ => session_error(SessionError::NotFound),
    }
}

/// Current session info
pub async fn me(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let token = match bearer_token(&headers) {
        Some(token) => token,
        None => return session_error(SessionError::Malformed),
    };

    match state.sessions.verify(token) {
        Ok(session) => Json(session).into_response(),
        Err(e) => session_error(e),
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn session_error(err: SessionError) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "error": err.to_string() })),
    )
        .into_response()
}

/// Usage counters
pub async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "total_queries": state.metrics.total_queries(),
        "empty_results": state.metrics.empty_results(),
        "by_kind": state.metrics.by_kind(),
        "live_sessions": state.sessions.len(),
    }))
}

/// Health check
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
