//! Error responses shared by all HTTP endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::ExportSessionError;
use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::ExportError;

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            details: Some(serde_json::json!({ "field": field })),
            ..Self::new("VALIDATION_FAILED", message)
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    /// Pairs the body with a status code.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Parses a session id path segment, answering 400 when malformed.
pub fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        ErrorResponse::bad_request("Invalid session ID").into_response_with(StatusCode::BAD_REQUEST)
    })
}

pub fn session_error_response(error: SessionError) -> Response {
    match error {
        SessionError::NotFound(id) => ErrorResponse::not_found("Session", &id.to_string())
            .into_response_with(StatusCode::NOT_FOUND),
        SessionError::ActorNotFound(id) => {
            ErrorResponse::not_found("Actor", &id).into_response_with(StatusCode::NOT_FOUND)
        }
        SessionError::ValidationFailed { field, message } => {
            ErrorResponse::validation(&field, message)
                .into_response_with(StatusCode::UNPROCESSABLE_ENTITY)
        }
        SessionError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Session store failure");
            ErrorResponse::internal("Internal error")
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub fn export_error_response(error: ExportSessionError) -> Response {
    match error {
        ExportSessionError::Session(e) => session_error_response(e),
        ExportSessionError::Export(e) => {
            let status = match e {
                ExportError::UnsupportedFormat(_) | ExportError::FormatDisabled(_) => {
                    StatusCode::BAD_REQUEST
                }
                ExportError::SerializationFailed(_) | ExportError::EncodingFailed(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            let body = if status == StatusCode::BAD_REQUEST {
                ErrorResponse::bad_request(e.user_message())
            } else {
                ErrorResponse::internal(e.user_message())
            };
            body.into_response_with(status)
        }
    }
}
