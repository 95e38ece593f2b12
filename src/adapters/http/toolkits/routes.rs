//! HTTP routes for toolkit submissions.

use axum::{
    routing::{post, put},
    Router,
};

use super::super::state::AppState;
use super::handlers::{
    add_actor, record_conflict, record_market_entry, record_rating, record_stakeholder_entry,
    record_value_map, set_knowledge,
};

/// Creates the router for SIT, SAT and MAT submissions.
pub fn toolkit_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/sessions/:id/sit/entries", post(record_stakeholder_entry))
        .route("/api/sessions/:id/sit/actors", post(add_actor))
        .route("/api/sessions/:id/sat/ratings", post(record_rating))
        .route("/api/sessions/:id/sat/conflicts", post(record_conflict))
        .route("/api/sessions/:id/sat/knowledge/:group", put(set_knowledge))
        .route("/api/sessions/:id/sat/value-maps", post(record_value_map))
        .route("/api/sessions/:id/mat/records", post(record_market_entry))
        .with_state(state)
}
