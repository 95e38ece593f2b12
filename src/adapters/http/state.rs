//! Shared state handed to every HTTP handler.

use std::sync::Arc;

use crate::application::{
    AddActorHandler, EndSessionHandler, ExportSessionHandler, ExportSettings,
    GetSessionViewHandler, RecordConflictHandler, RecordMarketEntryHandler, RecordRatingHandler,
    RecordStakeholderEntryHandler, RecordValueMapHandler, ResetSessionHandler,
    SetKnowledgeHandler, StartSessionHandler,
};
use crate::ports::{SessionStoreRepository, StoreExporter};

/// Application handlers wired to one repository.
#[derive(Clone)]
pub struct AppState {
    pub start_session: Arc<StartSessionHandler>,
    pub end_session: Arc<EndSessionHandler>,
    pub reset_session: Arc<ResetSessionHandler>,
    pub record_entry: Arc<RecordStakeholderEntryHandler>,
    pub add_actor: Arc<AddActorHandler>,
    pub record_rating: Arc<RecordRatingHandler>,
    pub record_conflict: Arc<RecordConflictHandler>,
    pub set_knowledge: Arc<SetKnowledgeHandler>,
    pub record_value_map: Arc<RecordValueMapHandler>,
    pub record_market_entry: Arc<RecordMarketEntryHandler>,
    pub get_view: Arc<GetSessionViewHandler>,
    pub export: Arc<ExportSessionHandler>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn SessionStoreRepository>,
        exporters: Vec<Arc<dyn StoreExporter>>,
        export_settings: ExportSettings,
    ) -> Self {
        Self {
            start_session: Arc::new(StartSessionHandler::new(repository.clone())),
            end_session: Arc::new(EndSessionHandler::new(repository.clone())),
            reset_session: Arc::new(ResetSessionHandler::new(repository.clone())),
            record_entry: Arc::new(RecordStakeholderEntryHandler::new(repository.clone())),
            add_actor: Arc::new(AddActorHandler::new(repository.clone())),
            record_rating: Arc::new(RecordRatingHandler::new(repository.clone())),
            record_conflict: Arc::new(RecordConflictHandler::new(repository.clone())),
            set_knowledge: Arc::new(SetKnowledgeHandler::new(repository.clone())),
            record_value_map: Arc::new(RecordValueMapHandler::new(repository.clone())),
            record_market_entry: Arc::new(RecordMarketEntryHandler::new(repository.clone())),
            get_view: Arc::new(GetSessionViewHandler::new(repository.clone())),
            export: Arc::new(ExportSessionHandler::new(
                repository,
                exporters,
                export_settings,
            )),
        }
    }
}
