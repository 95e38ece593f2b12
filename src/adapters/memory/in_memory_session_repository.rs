//! In-Memory Session Store Repository
//!
//! Keeps every live session's store in a map guarded by an async lock.
//! A session ends when it is deleted or, with an idle timeout configured,
//! once it has gone untouched for longer than that timeout.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::session::SessionStore;
use crate::ports::{RepositoryError, SessionStoreRepository, StoreMutation};

/// A stored session and the last time any request used it.
#[derive(Debug, Clone)]
struct SessionEntry {
    store: SessionStore,
    last_access: Timestamp,
}

/// In-memory storage for session stores
#[derive(Debug, Clone)]
pub struct InMemorySessionRepository {
    stores: Arc<RwLock<HashMap<SessionId, SessionEntry>>>,
    /// Sessions idle for longer than this are discarded; `None` keeps them.
    idle_timeout: Option<Duration>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self {
            stores: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout: None,
        }
    }

    /// Discard sessions nobody has used for `idle_timeout`.
    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = Some(idle_timeout);
        self
    }

    /// Number of live sessions
    pub async fn session_count(&self) -> usize {
        self.stores.read().await.len()
    }

    /// Drops every idle session; returns how many were dropped.
    pub async fn purge_idle(&self) -> usize {
        self.purge_idle_at(&Timestamp::now()).await
    }

    async fn purge_idle_at(&self, now: &Timestamp) -> usize {
        let mut stores = self.stores.write().await;
        let before = stores.len();
        stores.retain(|_, entry| !self.is_idle(entry, now));
        before - stores.len()
    }

    fn is_idle(&self, entry: &SessionEntry, now: &Timestamp) -> bool {
        let Some(idle_timeout) = self.idle_timeout else {
            return false;
        };
        now.as_datetime()
            .signed_duration_since(*entry.last_access.as_datetime())
            .to_std()
            .map(|elapsed| elapsed > idle_timeout)
            .unwrap_or(false)
    }

    /// Looks up a live entry, dropping it first if it has gone idle.
    fn live_entry<'a>(
        &self,
        stores: &'a mut HashMap<SessionId, SessionEntry>,
        id: &SessionId,
        now: &Timestamp,
    ) -> Option<&'a mut SessionEntry> {
        let idle = self.is_idle(stores.get(id)?, now);
        if idle {
            stores.remove(id);
            tracing::info!(session_id = %id, "Idle session discarded");
            return None;
        }
        stores.get_mut(id)
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStoreRepository for InMemorySessionRepository {
    async fn create(&self, store: &SessionStore) -> Result<(), RepositoryError> {
        let now = Timestamp::now();
        let mut stores = self.stores.write().await;
        stores.retain(|_, entry| !self.is_idle(entry, &now));
        if stores.contains_key(store.id()) {
            return Err(RepositoryError::AlreadyExists(*store.id()));
        }
        stores.insert(
            *store.id(),
            SessionEntry {
                store: store.clone(),
                last_access: now,
            },
        );
        Ok(())
    }

    async fn update(
        &self,
        id: &SessionId,
        mutation: StoreMutation<'_>,
    ) -> Result<SessionStore, RepositoryError> {
        let now = Timestamp::now();
        let mut stores = self.stores.write().await;
        let entry = self
            .live_entry(&mut stores, id, &now)
            .ok_or(RepositoryError::NotFound(*id))?;

        // Mutate a copy so a rejected change leaves the stored store intact.
        let mut updated = entry.store.clone();
        mutation(&mut updated).map_err(RepositoryError::Rejected)?;

        entry.store = updated.clone();
        entry.last_access = now;
        Ok(updated)
    }

    async fn find(&self, id: &SessionId) -> Result<Option<SessionStore>, RepositoryError> {
        let now = Timestamp::now();
        let mut stores = self.stores.write().await;
        Ok(self.live_entry(&mut stores, id, &now).map(|entry| {
            entry.last_access = now;
            entry.store.clone()
        }))
    }

    async fn delete(&self, id: &SessionId) -> Result<(), RepositoryError> {
        let mut stores = self.stores.write().await;
        stores
            .remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Role;
    use crate::domain::identification::Actor;
    use crate::domain::session::SessionError;
    use crate::ports::store_mutation;
    use chrono::Duration as ChronoDuration;

    fn add(name: &'static str, role: Role) -> StoreMutation<'static> {
        store_mutation(move |store| {
            store.add_actor(Actor::new(name, role)?)?;
            Ok(())
        })
    }

    fn later(seconds: i64) -> Timestamp {
        Timestamp::from_datetime(*Timestamp::now().as_datetime() + ChronoDuration::seconds(seconds))
    }

    #[tokio::test]
    async fn create_then_find_returns_copy() {
        let repo = InMemorySessionRepository::new();
        let store = SessionStore::new(SessionId::new());

        repo.create(&store).await.unwrap();

        let found = repo.find(store.id()).await.unwrap();
        assert_eq!(found, Some(store));
        assert_eq!(repo.session_count().await, 1);
    }

    #[tokio::test]
    async fn create_twice_is_rejected() {
        let repo = InMemorySessionRepository::new();
        let store = SessionStore::new(SessionId::new());
        repo.create(&store).await.unwrap();

        let err = repo.create(&store).await.unwrap_err();
        assert_eq!(err, RepositoryError::AlreadyExists(*store.id()));
    }

    #[tokio::test]
    async fn update_applies_mutation_and_returns_result() {
        let repo = InMemorySessionRepository::new();
        let store = SessionStore::new(SessionId::new());
        repo.create(&store).await.unwrap();

        let updated = repo.update(store.id(), add("Raju", Role::Producer)).await.unwrap();
        assert_eq!(updated.identification().actor_count(), 1);

        let found = repo.find(store.id()).await.unwrap().unwrap();
        assert_eq!(found, updated);
    }

    #[tokio::test]
    async fn rejected_mutation_leaves_store_unchanged() {
        let repo = InMemorySessionRepository::new();
        let store = SessionStore::new(SessionId::new());
        repo.create(&store).await.unwrap();

        let mutation = store_mutation(|store| {
            store.reset();
            Err(SessionError::validation("name", "Actor name cannot be empty"))
        });
        repo.update(store.id(), add("Raju", Role::Producer)).await.unwrap();
        let err = repo.update(store.id(), mutation).await.unwrap_err();

        assert!(matches!(err, RepositoryError::Rejected(SessionError::ValidationFailed { .. })));
        let found = repo.find(store.id()).await.unwrap().unwrap();
        assert_eq!(found.identification().actor_count(), 1);
    }

    #[tokio::test]
    async fn update_unknown_session_fails() {
        let repo = InMemorySessionRepository::new();
        let id = SessionId::new();
        assert_eq!(
            repo.update(&id, add("Raju", Role::Producer)).await.unwrap_err(),
            RepositoryError::NotFound(id)
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_updates_are_all_kept() {
        let repo = InMemorySessionRepository::new();
        let store = SessionStore::new(SessionId::new());
        repo.create(&store).await.unwrap();
        let id = *store.id();

        let tasks: Vec<_> = (0..32)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.update(&id, add("Lina", Role::Buyer)).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let found = repo.find(&id).await.unwrap().unwrap();
        assert_eq!(found.identification().actor_count(), 32);
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let repo = InMemorySessionRepository::new();
        let first = SessionStore::new(SessionId::new());
        let second = SessionStore::new(SessionId::new());
        repo.create(&first).await.unwrap();
        repo.create(&second).await.unwrap();

        repo.update(first.id(), add("Lina", Role::Buyer)).await.unwrap();

        let other = repo.find(second.id()).await.unwrap().unwrap();
        assert_eq!(other.identification().actor_count(), 0);
    }

    #[tokio::test]
    async fn delete_removes_session() {
        let repo = InMemorySessionRepository::new();
        let store = SessionStore::new(SessionId::new());
        repo.create(&store).await.unwrap();

        repo.delete(store.id()).await.unwrap();

        assert!(repo.find(store.id()).await.unwrap().is_none());
        assert!(repo.delete(store.id()).await.is_err());
    }

    #[tokio::test]
    async fn idle_sessions_are_purged() {
        let repo = InMemorySessionRepository::new().with_idle_timeout(Duration::from_secs(60));
        let store = SessionStore::new(SessionId::new());
        repo.create(&store).await.unwrap();

        assert_eq!(repo.purge_idle_at(&later(30)).await, 0);
        assert_eq!(repo.purge_idle_at(&later(120)).await, 1);

        assert_eq!(repo.session_count().await, 0);
        assert!(repo.find(store.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn idle_session_is_gone_on_next_access() {
        let repo = InMemorySessionRepository::new().with_idle_timeout(Duration::from_secs(60));
        let store = SessionStore::new(SessionId::new());
        repo.create(&store).await.unwrap();

        let mut stores = repo.stores.write().await;
        assert!(repo.live_entry(&mut stores, store.id(), &later(120)).is_none());
        assert!(stores.is_empty());
    }

    #[tokio::test]
    async fn without_timeout_sessions_never_expire() {
        let repo = InMemorySessionRepository::new();
        let store = SessionStore::new(SessionId::new());
        repo.create(&store).await.unwrap();

        assert_eq!(repo.purge_idle_at(&later(365 * 24 * 3600)).await, 0);
        assert_eq!(repo.session_count().await, 1);
    }
}
