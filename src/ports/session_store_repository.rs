//! Session store repository port.
//!
//! Each session identity maps to exactly one isolated `SessionStore`.
//! Readers get a copy; writers hand a mutation to `update`, which applies it
//! while no other writer can touch the same store.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::SessionId;
use crate::domain::session::{SessionError, SessionStore};

/// Errors raised by session store persistence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Session already exists: {0}")]
    AlreadyExists(SessionId),

    #[error("Storage error: {0}")]
    Storage(String),

    /// The mutation refused the change; the stored copy is unchanged.
    #[error("{0}")]
    Rejected(SessionError),
}

/// Change applied to a session's store inside `SessionStoreRepository::update`.
pub type StoreMutation<'a> =
    Box<dyn FnOnce(&mut SessionStore) -> Result<(), SessionError> + Send + 'a>;

/// Boxes a closure as a `StoreMutation`.
pub fn store_mutation<'a, F>(mutation: F) -> StoreMutation<'a>
where
    F: FnOnce(&mut SessionStore) -> Result<(), SessionError> + Send + 'a,
{
    Box::new(mutation)
}

impl From<RepositoryError> for SessionError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => SessionError::not_found(id),
            RepositoryError::Rejected(err) => err,
            other => SessionError::infrastructure(other.to_string()),
        }
    }
}

/// Repository port for per-session stores.
#[async_trait]
pub trait SessionStoreRepository: Send + Sync {
    /// Register a freshly created store.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if a store with the same id is registered
    async fn create(&self, store: &SessionStore) -> Result<(), RepositoryError>;

    /// Apply a mutation to a session's store atomically and return the
    /// resulting copy.
    ///
    /// Concurrent updates of one session run one after another, so none of
    /// them is lost. A mutation returning `Err` leaves the store untouched.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the session was never created or has ended
    /// - `Rejected` carrying the mutation's own error
    async fn update(
        &self,
        id: &SessionId,
        mutation: StoreMutation<'_>,
    ) -> Result<SessionStore, RepositoryError>;

    /// Load a copy of the store for a session.
    ///
    /// Returns `None` if not found.
    async fn find(&self, id: &SessionId) -> Result<Option<SessionStore>, RepositoryError>;

    /// Discard a session and everything it collected.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the session doesn't exist
    async fn delete(&self, id: &SessionId) -> Result<(), RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_store_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SessionStoreRepository) {}
    }

    #[test]
    fn not_found_maps_to_session_error() {
        let id = SessionId::new();
        let err: SessionError = RepositoryError::NotFound(id).into();
        assert_eq!(err, SessionError::not_found(id));
    }

    #[test]
    fn rejected_mutation_keeps_its_error() {
        let err: SessionError =
            RepositoryError::Rejected(SessionError::validation("name", "empty")).into();
        assert!(matches!(err, SessionError::ValidationFailed { ref field, .. } if field == "name"));
    }

    #[test]
    fn storage_failure_maps_to_infrastructure() {
        let err: SessionError = RepositoryError::Storage("lock poisoned".to_string()).into();
        assert!(matches!(err, SessionError::Infrastructure(_)));
    }
}
