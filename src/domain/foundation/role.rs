//! Role enum for the five craft value chain positions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Deep-dive questions asked of every role after its primary questionnaire.
pub const SECONDARY_QUESTIONS: &[&str] = &[
    "How frequently do they interact?",
    "What are the payment terms?",
    "Are there any challenges in this relationship?",
];

/// Position of an actor in the craft value chain.
///
/// Derived ordering follows the canonical chain sequence, so collections
/// keyed by role iterate Supplier first and Buyer last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Supplier,
    Producer,
    Refiner,
    Marketer,
    Buyer,
}

impl Role {
    /// Returns all roles in canonical chain order.
    pub fn all() -> &'static [Role] {
        &[
            Role::Supplier,
            Role::Producer,
            Role::Refiner,
            Role::Marketer,
            Role::Buyer,
        ]
    }

    /// Returns the 0-based position in the chain.
    pub fn order_index(&self) -> usize {
        *self as usize
    }

    /// Returns the next role downstream, if any.
    pub fn next(&self) -> Option<Role> {
        Self::all().get(self.order_index() + 1).copied()
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Supplier => "Supplier",
            Role::Producer => "Producer",
            Role::Refiner => "Refiner",
            Role::Marketer => "Marketer",
            Role::Buyer => "Buyer",
        }
    }

    /// Returns the primary interview questions for this role.
    pub fn primary_questions(&self) -> &'static [&'static str] {
        match self {
            Role::Supplier => &[
                "Who provides the raw materials?",
                "Where do they source materials from?",
                "What is their relationship with producers?",
            ],
            Role::Producer => &[
                "Who creates the craft products?",
                "What skills do they possess?",
                "How long have they been practicing?",
            ],
            Role::Refiner => &[
                "Who adds value to the basic product?",
                "What refinement processes are used?",
                "What expertise do they bring?",
            ],
            Role::Marketer => &[
                "Who promotes the products?",
                "What channels do they use?",
                "What is their reach?",
            ],
            Role::Buyer => &[
                "Who are the end consumers?",
                "What are their preferences?",
                "What price points do they prefer?",
            ],
        }
    }

    /// Primary questions followed by the shared secondary questions.
    pub fn questionnaire(&self) -> impl Iterator<Item = &'static str> {
        self.primary_questions()
            .iter()
            .chain(SECONDARY_QUESTIONS.iter())
            .copied()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::all()
            .iter()
            .find(|r| r.display_name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| ValidationError::invalid_format("role", format!("unknown role '{}'", s)))
    }
}
