//! Questionnaire submissions for a value chain role.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{Role, Timestamp};

/// One completed interview for a role.
///
/// Entries are immutable once recorded; the store only ever appends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeholderEntry {
    pub role: Role,
    /// Question text mapped to the free-text answer.
    pub responses: BTreeMap<String, String>,
    pub timestamp: Timestamp,
}

impl StakeholderEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(role: Role, responses: BTreeMap<String, String>) -> Self {
        Self::with_timestamp(role, responses, Timestamp::now())
    }

    /// Creates an entry with an explicit timestamp.
    pub fn with_timestamp(
        role: Role,
        responses: BTreeMap<String, String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            role,
            responses,
            timestamp,
        }
    }

    /// Returns the answer given to `question`, if any.
    pub fn answer(&self, question: &str) -> Option<&str> {
        self.responses.get(question).map(String::as_str)
    }

    /// Responses ordered as the role's questionnaire asks them, followed by
    /// any extra questions in key order.
    pub fn ordered_responses(&self) -> Vec<(&str, &str)> {
        let mut ordered: Vec<(&str, &str)> = self
            .role
            .questionnaire()
            .filter_map(|q| self.responses.get_key_value(q))
            .map(|(q, a)| (q.as_str(), a.as_str()))
            .collect();

        let extra = self
            .responses
            .iter()
            .filter(|(q, _)| !self.role.questionnaire().any(|known| known == q.as_str()))
            .map(|(q, a)| (q.as_str(), a.as_str()));
        ordered.extend(extra);
        ordered
    }
}
