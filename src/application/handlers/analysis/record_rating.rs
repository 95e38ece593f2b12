//! RecordRatingHandler - Stores a relationship matrix rating.

use std::sync::Arc;

use crate::domain::analysis::{RelationshipRating, StakeholderGroup};
use crate::domain::foundation::{ActorId, Score, SessionId};
use crate::domain::session::SessionError;
use crate::ports::{store_mutation, SessionStoreRepository};

/// Command to rate an actor on the four relationship axes (1-10 each).
#[derive(Debug, Clone)]
pub struct RecordRatingCommand {
    pub session_id: SessionId,
    pub stakeholder: ActorId,
    pub power: u8,
    pub interest: u8,
    pub legitimacy: u8,
    pub urgency: u8,
    pub interactions: String,
    pub tasks: String,
    pub knowledge: String,
}

/// Result of a recorded rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRatingResult {
    /// Power/interest quadrant of this rating.
    pub group: StakeholderGroup,
    pub total_ratings: usize,
}

/// Handler appending relationship ratings.
pub struct RecordRatingHandler {
    repository: Arc<dyn SessionStoreRepository>,
}

impl RecordRatingHandler {
    pub fn new(repository: Arc<dyn SessionStoreRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if a score is outside 1-10
    /// - `ActorNotFound` if the actor is not in this session
    pub async fn handle(
        &self,
        cmd: RecordRatingCommand,
    ) -> Result<RecordRatingResult, SessionError> {
        let mut rating = RelationshipRating::new(
            cmd.stakeholder,
            Score::for_field("power", cmd.power)?,
            Score::for_field("interest", cmd.interest)?,
            Score::for_field("legitimacy", cmd.legitimacy)?,
            Score::for_field("urgency", cmd.urgency)?,
        );
        rating.interactions = cmd.interactions;
        rating.tasks = cmd.tasks;
        rating.knowledge = cmd.knowledge;
        let group = StakeholderGroup::classify(rating.power, rating.interest);

        let store = self
            .repository
            .update(
                &cmd.session_id,
                store_mutation(move |store| store.record_rating(rating).map_err(Into::into)),
            )
            .await?;

        let total_ratings = store.analysis().relationship_data.len();
        tracing::info!(
            session_id = %cmd.session_id,
            actor_id = %cmd.stakeholder,
            group = %group,
            "Relationship rating recorded"
        );
        Ok(RecordRatingResult {
            group,
            total_ratings,
        })
    }
}
