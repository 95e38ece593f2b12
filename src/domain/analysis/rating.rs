//! Relationship matrix ratings and conflict entries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ActorId, Score};

/// Power/interest/legitimacy/urgency rating of one actor.
///
/// The same actor may be rated any number of times; every rating is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipRating {
    pub stakeholder: ActorId,
    pub power: Score,
    pub interest: Score,
    pub legitimacy: Score,
    pub urgency: Score,
    #[serde(default)]
    pub interactions: String,
    #[serde(default)]
    pub tasks: String,
    #[serde(default)]
    pub knowledge: String,
}

impl RelationshipRating {
    /// Creates a rating with empty free-text fields.
    pub fn new(
        stakeholder: ActorId,
        power: Score,
        interest: Score,
        legitimacy: Score,
        urgency: Score,
    ) -> Self {
        Self {
            stakeholder,
            power,
            interest,
            legitimacy,
            urgency,
            interactions: String::new(),
            tasks: String::new(),
            knowledge: String::new(),
        }
    }

    /// High power and high interest: needs close management.
    pub fn is_key_stakeholder(&self) -> bool {
        self.power.is_high() && self.interest.is_high()
    }
}

/// Cooperativeness/competitiveness assessment used for conflict strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictEntry {
    pub stakeholder: ActorId,
    pub cooperativeness: Score,
    pub competitiveness: Score,
    #[serde(default)]
    pub description: String,
}

impl ConflictEntry {
    pub fn new(
        stakeholder: ActorId,
        cooperativeness: Score,
        competitiveness: Score,
        description: impl Into<String>,
    ) -> Self {
        Self {
            stakeholder,
            cooperativeness,
            competitiveness,
            description: description.into(),
        }
    }
}
