//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the SIAMA toolbox domain.

mod errors;
mod ids;
mod role;
mod score;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ActorId, SessionId};
pub use role::{Role, SECONDARY_QUESTIONS};
pub use score::{Score, MAX_SCORE, MIDLINE, MIN_SCORE};
pub use timestamp::{Timestamp, DISPLAY_FORMAT, FILENAME_FORMAT};
