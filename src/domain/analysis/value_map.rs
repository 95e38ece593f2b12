//! Knowledge/responsibility entries and value proposition maps.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ActorId;

/// Knowledge, responsibilities and skills expected of a stakeholder group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    #[serde(default)]
    pub knowledge: String,
    #[serde(default)]
    pub responsibilities: String,
    #[serde(default)]
    pub skills: String,
}

/// Customer profile (pains, gains, jobs) matched against the training offer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueMapContent {
    #[serde(default)]
    pub pains: String,
    #[serde(default)]
    pub gains: String,
    #[serde(default)]
    pub jobs: String,
    #[serde(default)]
    pub pain_relievers: String,
    #[serde(default)]
    pub gain_creators: String,
    #[serde(default)]
    pub products_services: String,
}

/// Value exchange map for one actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueMap {
    pub stakeholder: ActorId,
    #[serde(flatten)]
    pub content: ValueMapContent,
}

impl ValueMap {
    pub fn new(stakeholder: ActorId, content: ValueMapContent) -> Self {
        Self {
            stakeholder,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_map_serializes_flat() {
        let id = ActorId::new();
        let map = ValueMap::new(
            id,
            ValueMapContent {
                pains: "middlemen margins".to_string(),
                ..Default::default()
            },
        );
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["pains"], "middlemen margins");
        assert_eq!(json["stakeholder"], id.to_string());
        assert!(json.get("content").is_none());
    }
}
