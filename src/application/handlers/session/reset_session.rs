//! ResetSessionHandler - Command handler for restarting data collection.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::{store_mutation, SessionStoreRepository};

/// Command to clear everything a session has collected.
#[derive(Debug, Clone)]
pub struct ResetSessionCommand {
    pub session_id: SessionId,
}

/// Handler for resetting a session's store while keeping the session.
pub struct ResetSessionHandler {
    repository: Arc<dyn SessionStoreRepository>,
}

impl ResetSessionHandler {
    pub fn new(repository: Arc<dyn SessionStoreRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ResetSessionCommand) -> Result<(), SessionError> {
        self.repository
            .update(
                &cmd.session_id,
                store_mutation(|store| {
                    store.reset();
                    Ok(())
                }),
            )
            .await?;

        tracing::info!(session_id = %cmd.session_id, "Session data reset");
        Ok(())
    }
}
