//! GetSessionViewHandler - Query handler for derived chart and table data.
//!
//! Loads the session's store and runs the requested view builder over it.
//! Views are never cached; every query recomputes from current data.

use std::sync::Arc;

use serde::Serialize;

use crate::application::handlers::session::load_store;
use crate::domain::foundation::SessionId;
use crate::domain::session::{SessionError, SessionStore};
use crate::domain::views::{
    ComplaintSummary, ConflictMatrix, IdentificationTable, QuadrantAxis, QuadrantView,
    RecommendationSummary, RoleCards, RoleDistribution, RoleMap, SessionSummary,
};
use crate::ports::SessionStoreRepository;

/// Which view to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    RoleDistribution,
    RoleMap,
    RoleCards,
    IdentificationTable,
    Quadrants(QuadrantAxis),
    Conflicts,
    Complaints,
    Summary,
    Recommendations,
}

/// Query for one view of a session.
#[derive(Debug, Clone)]
pub struct GetSessionViewQuery {
    pub session_id: SessionId,
    pub view: ViewKind,
}

/// A built view, serialized as the inner view's own shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SessionView {
    RoleDistribution(RoleDistribution),
    RoleMap(RoleMap),
    RoleCards(RoleCards),
    IdentificationTable(IdentificationTable),
    Quadrants(QuadrantView),
    Conflicts(ConflictMatrix),
    Complaints(ComplaintSummary),
    Summary(SessionSummary),
    Recommendations(RecommendationSummary),
}

impl SessionView {
    pub fn build(store: &SessionStore, kind: ViewKind) -> Self {
        match kind {
            ViewKind::RoleDistribution => {
                SessionView::RoleDistribution(RoleDistribution::from_store(store))
            }
            ViewKind::RoleMap => SessionView::RoleMap(RoleMap::from_store(store)),
            ViewKind::RoleCards => SessionView::RoleCards(RoleCards::from_store(store)),
            ViewKind::IdentificationTable => {
                SessionView::IdentificationTable(IdentificationTable::from_store(store))
            }
            ViewKind::Quadrants(axis) => {
                SessionView::Quadrants(QuadrantView::from_store(store, axis))
            }
            ViewKind::Conflicts => SessionView::Conflicts(ConflictMatrix::from_store(store)),
            ViewKind::Complaints => SessionView::Complaints(ComplaintSummary::from_store(store)),
            ViewKind::Summary => SessionView::Summary(SessionSummary::from_store(store)),
            ViewKind::Recommendations => {
                SessionView::Recommendations(RecommendationSummary::from_store(store))
            }
        }
    }
}

/// Handler for building views.
pub struct GetSessionViewHandler {
    repository: Arc<dyn SessionStoreRepository>,
}

impl GetSessionViewHandler {
    pub fn new(repository: Arc<dyn SessionStoreRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetSessionViewQuery) -> Result<SessionView, SessionError> {
        let store = load_store(self.repository.as_ref(), &query.session_id).await?;
        tracing::debug!(session_id = %query.session_id, view = ?query.view, "Building view");
        Ok(SessionView::build(&store, query.view))
    }
}
