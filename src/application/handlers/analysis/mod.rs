//! Stakeholder analysis handlers.

mod record_conflict;
mod record_rating;
mod record_value_map;
mod set_knowledge;

pub use record_conflict::{RecordConflictCommand, RecordConflictHandler};
pub use record_rating::{RecordRatingCommand, RecordRatingHandler, RecordRatingResult};
pub use record_value_map::{RecordValueMapCommand, RecordValueMapHandler};
pub use set_knowledge::{SetKnowledgeCommand, SetKnowledgeHandler};
