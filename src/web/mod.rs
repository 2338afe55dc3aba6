//! Web layer: routes, handlers, and shared application state

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
