//! HTTP DTOs for the SIT, SAT and MAT submission endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{StakeholderGroup, ValueMapContent};
use crate::domain::foundation::{ActorId, Role};
use crate::domain::views::ConflictStrategy;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Questionnaire answers for one role.
#[derive(Debug, Clone, Deserialize)]
pub struct StakeholderEntryRequest {
    pub role: Role,
    #[serde(default)]
    pub responses: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddActorRequest {
    pub role: Role,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub details: String,
}

/// Relationship matrix rating; scores are checked against 1-10 by the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct RatingRequest {
    pub stakeholder: ActorId,
    pub power: u8,
    pub interest: u8,
    pub legitimacy: u8,
    pub urgency: u8,
    #[serde(default)]
    pub interactions: String,
    #[serde(default)]
    pub tasks: String,
    #[serde(default)]
    pub knowledge: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConflictRequest {
    pub stakeholder: ActorId,
    pub cooperativeness: u8,
    pub competitiveness: u8,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValueMapRequest {
    pub stakeholder: ActorId,
    #[serde(flatten)]
    pub content: ValueMapContent,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRecordedResponse {
    pub total_entries: usize,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorAddedResponse {
    pub actor_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingRecordedResponse {
    pub group: StakeholderGroup,
    pub strategy: String,
    pub total_ratings: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConflictRecordedResponse {
    pub strategy: ConflictStrategy,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeSavedResponse {
    pub group: StakeholderGroup,
    pub replaced: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketRecordSavedResponse {
    pub tool: String,
    pub tool_name: String,
    pub entries: usize,
    pub tools_completed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_actor_request_defaults_optional_fields() {
        let json = r#"{"role": "Producer", "name": "Raju"}"#;
        let req: AddActorRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.role, Role::Producer);
        assert!(req.location.is_empty());
    }

    #[test]
    fn value_map_request_reads_flat_fields() {
        let id = ActorId::new();
        let json = format!(r#"{{"stakeholder": "{}", "pains": "late payment"}}"#, id);
        let req: ValueMapRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req.stakeholder, id);
        assert_eq!(req.content.pains, "late payment");
    }

    #[test]
    fn rating_request_rejects_negative_score() {
        let id = ActorId::new();
        let json = format!(
            r#"{{"stakeholder": "{}", "power": -1, "interest": 2, "legitimacy": 3, "urgency": 4}}"#,
            id
        );
        assert!(serde_json::from_str::<RatingRequest>(&json).is_err());
    }
}
