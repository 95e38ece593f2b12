//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate a session's store; query handlers build views
//! and exports from it.

pub mod handlers;

pub use handlers::analysis::{
    RecordConflictCommand, RecordConflictHandler, RecordRatingCommand, RecordRatingHandler,
    RecordRatingResult, RecordValueMapCommand, RecordValueMapHandler, SetKnowledgeCommand,
    SetKnowledgeHandler,
};
pub use handlers::export::{
    ExportSessionError, ExportSessionHandler, ExportSessionQuery, ExportSettings,
};
pub use handlers::identification::{
    AddActorCommand, AddActorHandler, RecordStakeholderEntryCommand,
    RecordStakeholderEntryHandler,
};
pub use handlers::market::{
    RecordMarketEntryCommand, RecordMarketEntryHandler, RecordMarketEntryResult,
};
pub use handlers::session::{
    EndSessionCommand, EndSessionHandler, ResetSessionCommand, ResetSessionHandler,
    StartSessionHandler, StartSessionResult,
};
pub use handlers::views::{GetSessionViewHandler, GetSessionViewQuery, SessionView, ViewKind};
