//! HTTP DTOs for session and questionnaire endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Role, SECONDARY_QUESTIONS};

/// Response for session command operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCommandResponse {
    pub session_id: String,
    pub message: String,
}

/// Questions asked of one value chain role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireResponse {
    pub role: Role,
    pub primary_questions: Vec<String>,
    pub secondary_questions: Vec<String>,
}

impl From<Role> for QuestionnaireResponse {
    fn from(role: Role) -> Self {
        Self {
            role,
            primary_questions: role.primary_questions().iter().map(|q| q.to_string()).collect(),
            secondary_questions: SECONDARY_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        }
    }
}
