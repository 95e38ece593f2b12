//! HTTP handlers for session lifecycle and questionnaire endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{EndSessionCommand, ResetSessionCommand};
use crate::domain::foundation::Role;

use super::super::error::{parse_session_id, session_error_response, ErrorResponse};
use super::super::state::AppState;
use super::dto::{QuestionnaireResponse, SessionCommandResponse};

/// POST /api/sessions - Start a new session
pub async fn start_session(State(state): State<AppState>) -> Response {
    match state.start_session.handle().await {
        Ok(result) => {
            let response = SessionCommandResponse {
                session_id: result.session_id.to_string(),
                message: "Session started".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => session_error_response(e),
    }
}

/// DELETE /api/sessions/:id - End a session and discard its data
pub async fn end_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.end_session.handle(EndSessionCommand { session_id }).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => session_error_response(e),
    }
}

/// POST /api/sessions/:id/reset - Clear all collected data
pub async fn reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.reset_session.handle(ResetSessionCommand { session_id }).await {
        Ok(()) => {
            let response = SessionCommandResponse {
                session_id: session_id.to_string(),
                message: "Session data cleared".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => session_error_response(e),
    }
}

/// GET /api/questionnaires/:role - Questions for a value chain role
pub async fn get_questionnaire(Path(role): Path<String>) -> Response {
    match role.parse::<Role>() {
        Ok(role) => (StatusCode::OK, Json(QuestionnaireResponse::from(role))).into_response(),
        Err(e) => {
            ErrorResponse::bad_request(e.to_string()).into_response_with(StatusCode::BAD_REQUEST)
        }
    }
}
