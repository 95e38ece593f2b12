//! HTTP adapters - REST API implementations.
//!
//! Each area has its own routes; `api_router` merges them into one app.

mod error;
pub mod session;
mod state;
pub mod toolkits;
pub mod views;

pub use error::ErrorResponse;
pub use session::session_routes;
pub use state::AppState;
pub use toolkits::toolkit_routes;
pub use views::view_routes;

use axum::{routing::get, Router};

/// Builds the full API router over one shared state.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(session_routes(state.clone()))
        .merge(toolkit_routes(state.clone()))
        .merge(view_routes(state))
}

async fn health() -> &'static str {
    "ok"
}
