//! RecordMarketEntryHandler - Saves output of one market analysis tool.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::market::{MarketRecord, MarketTool};
use crate::domain::session::SessionError;
use crate::ports::{store_mutation, SessionStoreRepository};

#[derive(Debug, Clone)]
pub struct RecordMarketEntryCommand {
    pub session_id: SessionId,
    pub record: MarketRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMarketEntryResult {
    pub tool: MarketTool,
    /// Records now held for the tool (always 1 for single-instance tools).
    pub entries: usize,
    pub tools_completed: usize,
}

/// Handler storing market records; list tools append, others replace.
pub struct RecordMarketEntryHandler {
    repository: Arc<dyn SessionStoreRepository>,
}

impl RecordMarketEntryHandler {
    pub fn new(repository: Arc<dyn SessionStoreRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RecordMarketEntryCommand,
    ) -> Result<RecordMarketEntryResult, SessionError> {
        let RecordMarketEntryCommand { session_id, record } = cmd;
        let tool = record.tool();
        let store = self
            .repository
            .update(
                &session_id,
                store_mutation(move |store| {
                    store.set_market_record(record);
                    Ok(())
                }),
            )
            .await?;

        let market = store.market();
        let entries = match tool {
            MarketTool::BehavioralSegmentation => market.behavioral_segments.len(),
            MarketTool::UserPersona => market.personas.len(),
            MarketTool::MysteryShopping => market.mystery_shopping.len(),
            MarketTool::ComplaintAnalysis => market.complaints.len(),
            _ => 1,
        };
        let tools_completed = market.completed_count();

        tracing::info!(
            session_id = %session_id,
            tool = tool.key(),
            entries,
            "Market record saved"
        );
        Ok(RecordMarketEntryResult {
            tool,
            entries,
            tools_completed,
        })
    }
}
