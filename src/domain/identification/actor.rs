//! Actor entity - a named participant filling a value chain role.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ActorId, Role, ValidationError};

/// A concrete person or organisation identified for a role.
///
/// # Invariants
///
/// - `name` is non-empty after trimming
/// - `id` is generated once and never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub details: String,
}

impl Actor {
    /// Creates an actor with a fresh id.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    pub fn new(name: impl Into<String>, role: Role) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: ActorId::new(),
            name: trimmed.to_string(),
            role,
            location: String::new(),
            contact: String::new(),
            details: String::new(),
        })
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    /// Display label, e.g. `Raju (Producer)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.role)
    }
}
