//! RecordStakeholderEntryHandler - Stores a completed role questionnaire.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::foundation::{Role, SessionId};
use crate::domain::identification::StakeholderEntry;
use crate::domain::session::SessionError;
use crate::ports::{store_mutation, SessionStoreRepository};

/// Command to record one questionnaire submission.
#[derive(Debug, Clone)]
pub struct RecordStakeholderEntryCommand {
    pub session_id: SessionId,
    pub role: Role,
    pub responses: BTreeMap<String, String>,
}

/// Handler appending stakeholder entries.
pub struct RecordStakeholderEntryHandler {
    repository: Arc<dyn SessionStoreRepository>,
}

impl RecordStakeholderEntryHandler {
    pub fn new(repository: Arc<dyn SessionStoreRepository>) -> Self {
        Self { repository }
    }

    /// Returns the number of entries recorded so far.
    pub async fn handle(&self, cmd: RecordStakeholderEntryCommand) -> Result<usize, SessionError> {
        let entry = StakeholderEntry::new(cmd.role, cmd.responses);
        let store = self
            .repository
            .update(
                &cmd.session_id,
                store_mutation(move |store| {
                    store.record_stakeholder_entry(entry);
                    Ok(())
                }),
            )
            .await?;

        let total = store.identification().stakeholders.len();
        tracing::info!(
            session_id = %cmd.session_id,
            role = %cmd.role,
            total,
            "Stakeholder entry recorded"
        );
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionRepository;
    use crate::domain::session::SessionStore;

    #[tokio::test]
    async fn duplicate_submissions_are_both_kept() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let store = SessionStore::new(SessionId::new());
        repo.create(&store).await.unwrap();
        let handler = RecordStakeholderEntryHandler::new(repo.clone());

        let mut responses = BTreeMap::new();
        responses.insert(
            "Who sells the products?".to_string(),
            "Weekly haat traders".to_string(),
        );
        let cmd = RecordStakeholderEntryCommand {
            session_id: *store.id(),
            role: Role::Marketer,
            responses,
        };

        assert_eq!(handler.handle(cmd.clone()).await.unwrap(), 1);
        assert_eq!(handler.handle(cmd).await.unwrap(), 2);

        let stored = repo.find(store.id()).await.unwrap().unwrap();
        assert_eq!(stored.identification().stakeholders[1].role, Role::Marketer);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let id = SessionId::new();
        let err = RecordStakeholderEntryHandler::new(repo)
            .handle(RecordStakeholderEntryCommand {
                session_id: id,
                role: Role::Buyer,
                responses: BTreeMap::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::not_found(id));
    }
}
