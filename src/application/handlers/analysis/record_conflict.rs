//! RecordConflictHandler - Stores a conflict assessment for an actor.

use std::sync::Arc;

use crate::domain::analysis::ConflictEntry;
use crate::domain::foundation::{ActorId, Score, SessionId};
use crate::domain::session::SessionError;
use crate::domain::views::ConflictStrategy;
use crate::ports::{store_mutation, SessionStoreRepository};

#[derive(Debug, Clone)]
pub struct RecordConflictCommand {
    pub session_id: SessionId,
    pub stakeholder: ActorId,
    pub cooperativeness: u8,
    pub competitiveness: u8,
    pub description: String,
}

/// Handler appending conflict entries; returns the suggested strategy.
pub struct RecordConflictHandler {
    repository: Arc<dyn SessionStoreRepository>,
}

impl RecordConflictHandler {
    pub fn new(repository: Arc<dyn SessionStoreRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RecordConflictCommand,
    ) -> Result<ConflictStrategy, SessionError> {
        let entry = ConflictEntry::new(
            cmd.stakeholder,
            Score::for_field("cooperativeness", cmd.cooperativeness)?,
            Score::for_field("competitiveness", cmd.competitiveness)?,
            cmd.description,
        );
        let strategy = ConflictStrategy::classify(entry.cooperativeness, entry.competitiveness);

        self.repository
            .update(
                &cmd.session_id,
                store_mutation(move |store| store.record_conflict(entry).map_err(Into::into)),
            )
            .await?;

        tracing::info!(
            session_id = %cmd.session_id,
            actor_id = %cmd.stakeholder,
            strategy = %strategy,
            "Conflict entry recorded"
        );
        Ok(strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionRepository;
    use crate::domain::foundation::Role;
    use crate::domain::identification::Actor;
    use crate::domain::session::SessionStore;

    #[tokio::test]
    async fn records_conflict_with_strategy() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let mut store = SessionStore::new(SessionId::new());
        let actor = store
            .add_actor(Actor::new("Asha", Role::Marketer).unwrap())
            .unwrap();
        repo.create(&store).await.unwrap();

        let strategy = RecordConflictHandler::new(repo.clone())
            .handle(RecordConflictCommand {
                session_id: *store.id(),
                stakeholder: actor,
                cooperativeness: 2,
                competitiveness: 9,
                description: "undercuts prices".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(strategy, ConflictStrategy::Competition);
        let stored = repo.find(store.id()).await.unwrap().unwrap();
        assert_eq!(stored.analysis().conflict_data[0].description, "undercuts prices");
    }

    #[tokio::test]
    async fn zero_score_is_rejected() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let store = SessionStore::new(SessionId::new());
        repo.create(&store).await.unwrap();

        let err = RecordConflictHandler::new(repo)
            .handle(RecordConflictCommand {
                session_id: *store.id(),
                stakeholder: ActorId::new(),
                cooperativeness: 0,
                competitiveness: 5,
                description: String::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SessionError::ValidationFailed { ref field, .. } if field == "cooperativeness"
        ));
    }
}
