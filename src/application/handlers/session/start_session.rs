//! StartSessionHandler - Command handler for opening a new working session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{SessionError, SessionStore};
use crate::ports::SessionStoreRepository;

/// Result of starting a session.
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub session_id: SessionId,
    pub store: SessionStore,
}

/// Handler for starting sessions with an empty store.
pub struct StartSessionHandler {
    repository: Arc<dyn SessionStoreRepository>,
}

impl StartSessionHandler {
    pub fn new(repository: Arc<dyn SessionStoreRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<StartSessionResult, SessionError> {
        let session_id = SessionId::new();
        let store = SessionStore::new(session_id);

        self.repository.create(&store).await?;

        tracing::info!(session_id = %session_id, "Session started");
        Ok(StartSessionResult { session_id, store })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionRepository;

    #[tokio::test]
    async fn starts_empty_registered_session() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let handler = StartSessionHandler::new(repo.clone());

        let result = handler.handle().await.unwrap();

        let stored = repo.find(&result.session_id).await.unwrap().unwrap();
        assert_eq!(stored.identification().actor_count(), 0);
        assert_eq!(stored.market().completed_count(), 0);
    }

    #[tokio::test]
    async fn each_start_gets_its_own_session() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let handler = StartSessionHandler::new(repo.clone());

        let a = handler.handle().await.unwrap();
        let b = handler.handle().await.unwrap();

        assert_ne!(a.session_id, b.session_id);
        assert_eq!(repo.session_count().await, 2);
    }
}
