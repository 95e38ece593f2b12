//! AddActorHandler - Adds a named actor to a value chain role.

use std::sync::Arc;

use crate::domain::foundation::{ActorId, Role, SessionId};
use crate::domain::identification::Actor;
use crate::domain::session::SessionError;
use crate::ports::{store_mutation, SessionStoreRepository};

/// Command to add an actor.
#[derive(Debug, Clone)]
pub struct AddActorCommand {
    pub session_id: SessionId,
    pub role: Role,
    pub name: String,
    pub location: String,
    pub contact: String,
    pub details: String,
}

/// Handler for adding actors to the role database.
pub struct AddActorHandler {
    repository: Arc<dyn SessionStoreRepository>,
}

impl AddActorHandler {
    pub fn new(repository: Arc<dyn SessionStoreRepository>) -> Self {
        Self { repository }
    }

    /// Returns the id assigned to the new actor.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name is blank; nothing is stored
    /// - `NotFound` if the session doesn't exist
    pub async fn handle(&self, cmd: AddActorCommand) -> Result<ActorId, SessionError> {
        let actor = match Actor::new(cmd.name, cmd.role) {
            Ok(actor) => actor
                .with_location(cmd.location)
                .with_contact(cmd.contact)
                .with_details(cmd.details),
            Err(e) => {
                tracing::warn!(session_id = %cmd.session_id, error = %e, "Actor rejected");
                return Err(e.into());
            }
        };

        let actor_id = actor.id;
        self.repository
            .update(
                &cmd.session_id,
                store_mutation(move |store| {
                    store.add_actor(actor)?;
                    Ok(())
                }),
            )
            .await?;

        tracing::info!(
            session_id = %cmd.session_id,
            actor_id = %actor_id,
            role = %cmd.role,
            "Actor added"
        );
        Ok(actor_id)
    }
}
