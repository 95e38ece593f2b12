//! HTTP handlers for derived views and data export.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{ExportSessionError, ExportSessionQuery, GetSessionViewQuery, ViewKind};
use crate::domain::views::QuadrantAxis;
use crate::ports::ExportFormat;

use super::super::error::{
    export_error_response, parse_session_id, session_error_response, ErrorResponse,
};
use super::super::state::AppState;

async fn render(state: &AppState, raw_id: &str, view: ViewKind) -> Response {
    let session_id = match parse_session_id(raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .get_view
        .handle(GetSessionViewQuery { session_id, view })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => session_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Stakeholder identification views
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/sessions/:id/views/role-distribution
pub async fn role_distribution(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    render(&state, &session_id, ViewKind::RoleDistribution).await
}

/// GET /api/sessions/:id/views/role-map
pub async fn role_map(State(state): State<AppState>, Path(session_id): Path<String>) -> Response {
    render(&state, &session_id, ViewKind::RoleMap).await
}

/// GET /api/sessions/:id/views/role-cards
pub async fn role_cards(State(state): State<AppState>, Path(session_id): Path<String>) -> Response {
    render(&state, &session_id, ViewKind::RoleCards).await
}

/// GET /api/sessions/:id/views/identification-table
pub async fn identification_table(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    render(&state, &session_id, ViewKind::IdentificationTable).await
}

// ════════════════════════════════════════════════════════════════════════════
// Stakeholder analysis views
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/sessions/:id/views/quadrants/:axis
pub async fn quadrants(
    State(state): State<AppState>,
    Path((session_id, axis)): Path<(String, String)>,
) -> Response {
    let axis = match axis.parse::<QuadrantAxis>() {
        Ok(axis) => axis,
        Err(e) => {
            return ErrorResponse::bad_request(e.to_string())
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };
    render(&state, &session_id, ViewKind::Quadrants(axis)).await
}

/// GET /api/sessions/:id/views/conflicts
pub async fn conflicts(State(state): State<AppState>, Path(session_id): Path<String>) -> Response {
    render(&state, &session_id, ViewKind::Conflicts).await
}

// ════════════════════════════════════════════════════════════════════════════
// Market analysis and training views
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/sessions/:id/views/complaints
pub async fn complaints(State(state): State<AppState>, Path(session_id): Path<String>) -> Response {
    render(&state, &session_id, ViewKind::Complaints).await
}

/// GET /api/sessions/:id/views/summary
pub async fn summary(State(state): State<AppState>, Path(session_id): Path<String>) -> Response {
    render(&state, &session_id, ViewKind::Summary).await
}

/// GET /api/sessions/:id/views/recommendations
pub async fn recommendations(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    render(&state, &session_id, ViewKind::Recommendations).await
}

// ════════════════════════════════════════════════════════════════════════════
// Export
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/sessions/:id/export/:format - Download the session's data
pub async fn export_session(
    State(state): State<AppState>,
    Path((session_id, format)): Path<(String, String)>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let format = match format.parse::<ExportFormat>() {
        Ok(format) => format,
        Err(e) => return export_error_response(ExportSessionError::Export(e)),
    };

    match state
        .export
        .handle(ExportSessionQuery { session_id, format })
        .await
    {
        Ok(file) => {
            let disposition = format!("attachment; filename=\"{}\"", file.filename);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, file.content_type),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                file.content,
            )
                .into_response()
        }
        Err(e) => export_error_response(e),
    }
}
