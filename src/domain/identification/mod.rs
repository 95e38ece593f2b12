//! Stakeholder Identification (SIT) records.
//!
//! Questionnaire entries per role and the role-grouped actor database.

mod actor;
mod stakeholder_entry;

pub use actor::Actor;
pub use stakeholder_entry::StakeholderEntry;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{ActorId, Role};

/// Everything collected by the identification toolkit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentificationData {
    /// Questionnaire submissions, append-only.
    #[serde(default)]
    pub stakeholders: Vec<StakeholderEntry>,

    /// Actors grouped by role; a bucket exists once its first actor is added.
    #[serde(default)]
    pub roles: BTreeMap<Role, Vec<Actor>>,
}

impl IdentificationData {
    /// Actors of one role in insertion order.
    pub fn actors_for(&self, role: Role) -> &[Actor] {
        self.roles.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All actors, roles in canonical order.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.roles.values().flatten()
    }

    pub fn actor(&self, id: &ActorId) -> Option<&Actor> {
        self.actors().find(|a| &a.id == id)
    }

    pub fn actor_count(&self) -> usize {
        self.roles.values().map(Vec::len).sum()
    }
}
