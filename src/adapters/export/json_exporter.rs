//! JSON export adapter.
//!
//! Produces a single pretty-printed document holding the three toolkit
//! mappings and the export date.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::analysis::AnalysisData;
use crate::domain::foundation::Timestamp;
use crate::domain::identification::IdentificationData;
use crate::domain::market::MarketData;
use crate::domain::session::SessionStore;
use crate::ports::{ExportError, ExportFormat, StoreExporter};

/// Top-level layout of an exported JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub sit_data: IdentificationData,
    pub sat_data: AnalysisData,
    pub mat_data: MarketData,
    /// `YYYY-MM-DD HH:MM:SS`
    pub export_date: String,
}

impl ExportDocument {
    pub fn from_store(store: &SessionStore, exported_at: &Timestamp) -> Self {
        Self {
            sit_data: store.identification().clone(),
            sat_data: store.analysis().clone(),
            mat_data: store.market().clone(),
            export_date: exported_at.display(),
        }
    }
}

/// Exporter writing `ExportDocument` as indented JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StoreExporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    async fn export(
        &self,
        store: &SessionStore,
        exported_at: &Timestamp,
    ) -> Result<Vec<u8>, ExportError> {
        let document = ExportDocument::from_store(store, exported_at);
        serde_json::to_vec_pretty(&document)
            .map_err(|e| ExportError::SerializationFailed(e.to_string()))
    }
}
