//! Session lifecycle handlers.
//!
//! Also hosts `load_store`, the read-only lookup used by views and export.

mod end_session;
mod reset_session;
mod start_session;

pub use end_session::{EndSessionCommand, EndSessionHandler};
pub use reset_session::{ResetSessionCommand, ResetSessionHandler};
pub use start_session::{StartSessionHandler, StartSessionResult};

use crate::domain::foundation::SessionId;
use crate::domain::session::{SessionError, SessionStore};
use crate::ports::SessionStoreRepository;

/// Loads the store of a live session.
///
/// # Errors
///
/// - `NotFound` if the session was never started or has ended
pub async fn load_store(
    repository: &dyn SessionStoreRepository,
    session_id: &SessionId,
) -> Result<SessionStore, SessionError> {
    repository
        .find(session_id)
        .await?
        .ok_or_else(|| SessionError::not_found(*session_id))
}
