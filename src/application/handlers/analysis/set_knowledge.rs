//! SetKnowledgeHandler - Upserts the knowledge chart of a stakeholder group.

use std::sync::Arc;

use crate::domain::analysis::{KnowledgeEntry, StakeholderGroup};
use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::{store_mutation, SessionStoreRepository};

#[derive(Debug, Clone)]
pub struct SetKnowledgeCommand {
    pub session_id: SessionId,
    pub group: StakeholderGroup,
    pub entry: KnowledgeEntry,
}

/// Handler for the knowledge and responsibility chart.
pub struct SetKnowledgeHandler {
    repository: Arc<dyn SessionStoreRepository>,
}

impl SetKnowledgeHandler {
    pub fn new(repository: Arc<dyn SessionStoreRepository>) -> Self {
        Self { repository }
    }

    /// Returns true when an earlier entry for the group was replaced.
    pub async fn handle(&self, cmd: SetKnowledgeCommand) -> Result<bool, SessionError> {
        let SetKnowledgeCommand {
            session_id,
            group,
            entry,
        } = cmd;
        let mut replaced = false;
        self.repository
            .update(
                &session_id,
                store_mutation(|store| {
                    replaced = store.set_knowledge(group, entry).is_some();
                    Ok(())
                }),
            )
            .await?;

        tracing::info!(
            session_id = %session_id,
            group = %group,
            replaced,
            "Knowledge entry saved"
        );
        Ok(replaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionRepository;
    use crate::domain::session::SessionStore;

    #[tokio::test]
    async fn second_write_replaces_first() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let store = SessionStore::new(SessionId::new());
        repo.create(&store).await.unwrap();
        let handler = SetKnowledgeHandler::new(repo.clone());

        let cmd = |skills: &str| SetKnowledgeCommand {
            session_id: *store.id(),
            group: StakeholderGroup::Monitor,
            entry: KnowledgeEntry {
                skills: skills.to_string(),
                ..Default::default()
            },
        };

        assert!(!handler.handle(cmd("loom repair")).await.unwrap());
        assert!(handler.handle(cmd("natural dyeing")).await.unwrap());

        let stored = repo.find(store.id()).await.unwrap().unwrap();
        let knowledge = &stored.analysis().knowledge_data;
        assert_eq!(knowledge.len(), 1);
        assert_eq!(knowledge[&StakeholderGroup::Monitor].skills, "natural dyeing");
    }
}
