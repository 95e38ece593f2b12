//! HTTP adapter for session lifecycle and questionnaire endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{QuestionnaireResponse, SessionCommandResponse};
pub use routes::session_routes;
