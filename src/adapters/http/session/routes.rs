//! HTTP routes for session endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::super::state::AppState;
use super::handlers::{end_session, get_questionnaire, reset_session, start_session};

/// Creates the session router with all endpoints.
pub fn session_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/sessions", post(start_session))
        .route("/api/sessions/:id", delete(end_session))
        .route("/api/sessions/:id/reset", post(reset_session))
        .route("/api/questionnaires/:role", get(get_questionnaire))
        .with_state(state)
}
