//! RecordValueMapHandler - Stores a value proposition map for an actor.

use std::sync::Arc;

use crate::domain::analysis::{ValueMap, ValueMapContent};
use crate::domain::foundation::{ActorId, SessionId};
use crate::domain::session::SessionError;
use crate::ports::{store_mutation, SessionStoreRepository};

#[derive(Debug, Clone)]
pub struct RecordValueMapCommand {
    pub session_id: SessionId,
    pub stakeholder: ActorId,
    pub content: ValueMapContent,
}

/// Handler appending value maps.
pub struct RecordValueMapHandler {
    repository: Arc<dyn SessionStoreRepository>,
}

impl RecordValueMapHandler {
    pub fn new(repository: Arc<dyn SessionStoreRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RecordValueMapCommand) -> Result<(), SessionError> {
        let value_map = ValueMap::new(cmd.stakeholder, cmd.content);
        self.repository
            .update(
                &cmd.session_id,
                store_mutation(move |store| store.record_value_map(value_map).map_err(Into::into)),
            )
            .await?;

        tracing::info!(
            session_id = %cmd.session_id,
            actor_id = %cmd.stakeholder,
            "Value map recorded"
        );
        Ok(())
    }
}
