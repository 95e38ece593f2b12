//! EndSessionHandler - Command handler for discarding a session's data.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::SessionStoreRepository;

/// Command to end a session.
#[derive(Debug, Clone)]
pub struct EndSessionCommand {
    pub session_id: SessionId,
}

/// Handler for ending sessions; the store is dropped with the session.
pub struct EndSessionHandler {
    repository: Arc<dyn SessionStoreRepository>,
}

impl EndSessionHandler {
    pub fn new(repository: Arc<dyn SessionStoreRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: EndSessionCommand) -> Result<(), SessionError> {
        self.repository.delete(&cmd.session_id).await?;
        tracing::info!(session_id = %cmd.session_id, "Session ended");
        Ok(())
    }
}
