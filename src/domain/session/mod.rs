//! Session domain module.
//!
//! A session owns one `SessionStore`, created empty when the session starts
//! and discarded when it ends.

mod errors;
mod store;

pub use errors::SessionError;
pub use store::{SessionStore, UNKNOWN_STAKEHOLDER};
