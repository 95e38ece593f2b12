//! Session store aggregate.
//!
//! One store per working session holds everything the three toolkits
//! collect. Form submissions mutate it; views and exports only read it.
//!
//! # Ownership
//!
//! The store is owned by exactly one session. Callers pass it by reference
//! into the view builder; nothing is shared between sessions.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{
    AnalysisData, ConflictEntry, KnowledgeEntry, RelationshipRating, StakeholderGroup, ValueMap,
};
use crate::domain::foundation::{ActorId, DomainError, ErrorCode, SessionId, Timestamp};
use crate::domain::identification::{Actor, IdentificationData, StakeholderEntry};
use crate::domain::market::{MarketData, MarketRecord, MarketTool};

/// Label used when a reference no longer resolves to an actor.
pub const UNKNOWN_STAKEHOLDER: &str = "Unknown stakeholder";

/// Session-scoped store of identification, analysis and market data.
///
/// # Invariants
///
/// - Every actor has a non-empty name
/// - Ratings, conflicts and value maps reference actors present in this store
/// - Stakeholder entries, ratings, conflicts and value maps are append-only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStore {
    id: SessionId,
    identification: IdentificationData,
    analysis: AnalysisData,
    market: MarketData,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl SessionStore {
    /// Creates an empty store for a new session.
    pub fn new(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            identification: IdentificationData::default(),
            analysis: AnalysisData::default(),
            market: MarketData::default(),
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn identification(&self) -> &IdentificationData {
        &self.identification
    }

    pub fn analysis(&self) -> &AnalysisData {
        &self.analysis
    }

    pub fn market(&self) -> &MarketData {
        &self.market
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn actor(&self, id: &ActorId) -> Option<&Actor> {
        self.identification.actor(id)
    }

    /// Resolves an actor reference to its `name (Role)` label.
    pub fn stakeholder_label(&self, id: &ActorId) -> String {
        self.actor(id)
            .map(Actor::label)
            .unwrap_or_else(|| UNKNOWN_STAKEHOLDER.to_string())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Identification
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a questionnaire submission. Duplicates are kept.
    pub fn record_stakeholder_entry(&mut self, entry: StakeholderEntry) {
        self.identification.stakeholders.push(entry);
        self.touch();
    }

    /// Adds an actor to its role bucket, creating the bucket if needed.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name is blank; the store is left untouched
    pub fn add_actor(&mut self, actor: Actor) -> Result<ActorId, DomainError> {
        if actor.name.trim().is_empty() {
            return Err(DomainError::validation("name", "Actor name cannot be empty"));
        }

        let id = actor.id;
        self.identification
            .roles
            .entry(actor.role)
            .or_default()
            .push(actor);
        self.touch();
        Ok(id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Analysis
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a relationship rating.
    ///
    /// # Errors
    ///
    /// - `ActorNotFound` if the rated actor is not in this store
    pub fn record_rating(&mut self, rating: RelationshipRating) -> Result<(), DomainError> {
        self.ensure_actor(&rating.stakeholder)?;
        self.analysis.relationship_data.push(rating);
        self.touch();
        Ok(())
    }

    /// Appends a conflict assessment.
    ///
    /// # Errors
    ///
    /// - `ActorNotFound` if the actor is not in this store
    pub fn record_conflict(&mut self, conflict: ConflictEntry) -> Result<(), DomainError> {
        self.ensure_actor(&conflict.stakeholder)?;
        self.analysis.conflict_data.push(conflict);
        self.touch();
        Ok(())
    }

    /// Appends a value exchange map.
    ///
    /// # Errors
    ///
    /// - `ActorNotFound` if the actor is not in this store
    pub fn record_value_map(&mut self, value_map: ValueMap) -> Result<(), DomainError> {
        self.ensure_actor(&value_map.stakeholder)?;
        self.analysis.value_map.push(value_map);
        self.touch();
        Ok(())
    }

    /// Upserts the knowledge entry of a stakeholder group, returning the
    /// entry it replaced.
    pub fn set_knowledge(
        &mut self,
        group: StakeholderGroup,
        entry: KnowledgeEntry,
    ) -> Option<KnowledgeEntry> {
        let previous = self.analysis.knowledge_data.insert(group, entry);
        self.touch();
        previous
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Market
    // ─────────────────────────────────────────────────────────────────────────

    /// Saves a market analysis record and returns the tool it belongs to.
    pub fn set_market_record(&mut self, record: MarketRecord) -> MarketTool {
        let tool = record.tool();
        self.market.apply(record);
        self.touch();
        tool
    }

    /// Clears all collected data, keeping the session identity.
    pub fn reset(&mut self) {
        self.identification = IdentificationData::default();
        self.analysis = AnalysisData::default();
        self.market = MarketData::default();
        self.touch();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_actor(&self, id: &ActorId) -> Result<(), DomainError> {
        if self.actor(id).is_some() {
            Ok(())
        } else {
            Err(
                DomainError::new(ErrorCode::ActorNotFound, format!("Actor not found: {}", id))
                    .with_detail("actor_id", id.to_string()),
            )
        }
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
