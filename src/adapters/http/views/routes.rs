//! HTTP routes for views and export.

use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::{
    complaints, conflicts, export_session, identification_table, quadrants, recommendations,
    role_cards, role_distribution, role_map, summary,
};

/// Creates the router for read-only views and downloads.
pub fn view_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/sessions/:id/views/role-distribution", get(role_distribution))
        .route("/api/sessions/:id/views/role-map", get(role_map))
        .route("/api/sessions/:id/views/role-cards", get(role_cards))
        .route(
            "/api/sessions/:id/views/identification-table",
            get(identification_table),
        )
        .route("/api/sessions/:id/views/quadrants/:axis", get(quadrants))
        .route("/api/sessions/:id/views/conflicts", get(conflicts))
        .route("/api/sessions/:id/views/complaints", get(complaints))
        .route("/api/sessions/:id/views/summary", get(summary))
        .route("/api/sessions/:id/views/recommendations", get(recommendations))
        .route("/api/sessions/:id/export/:format", get(export_session))
        .with_state(state)
}
