//! View builder - display data derived from a session store.
//!
//! Every view is a pure function of `&SessionStore` and is recomputed on
//! each request; nothing here is cached or written back to the store.

mod complaints;
mod conflict_strategy;
mod identification_table;
mod quadrants;
mod role_distribution;
mod summary;

pub use complaints::{CategoryCount, ComplaintSummary, SeverityCount};
pub use conflict_strategy::{ConflictMatrix, ConflictPoint, ConflictStrategy, StrategyCount};
pub use identification_table::{
    IdentificationRow, IdentificationTable, TableCell, ANSWER_WIDTH, QUESTION_WIDTH,
};
pub use quadrants::{GroupCount, QuadrantAxis, QuadrantPoint, QuadrantView};
pub use role_distribution::{
    ActorCard, FlowEdge, FlowIndicator, RoleCard, RoleCards, RoleCount, RoleDistribution,
    RoleMap, RoleNode,
};
pub use summary::{FocusArea, RecommendationSummary, SessionSummary, TRAINING_FOCUS_AREAS};
