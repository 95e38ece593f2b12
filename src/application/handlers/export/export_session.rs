//! ExportSessionHandler - Encodes a session's data as a downloadable file.

use std::sync::Arc;

use thiserror::Error;

use crate::application::handlers::session::load_store;
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::session::SessionError;
use crate::ports::{ExportError, ExportFormat, ExportedFile, SessionStoreRepository, StoreExporter};

/// Default download name prefix.
pub const DEFAULT_FILENAME_PREFIX: &str = "siama_data";

/// Export behaviour switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub filename_prefix: String,
    pub spreadsheet_enabled: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            filename_prefix: DEFAULT_FILENAME_PREFIX.to_string(),
            spreadsheet_enabled: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportSessionQuery {
    pub session_id: SessionId,
    pub format: ExportFormat,
}

#[derive(Debug, Error)]
pub enum ExportSessionError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Handler dispatching to the exporter registered for the requested format.
pub struct ExportSessionHandler {
    repository: Arc<dyn SessionStoreRepository>,
    exporters: Vec<Arc<dyn StoreExporter>>,
    settings: ExportSettings,
}

impl ExportSessionHandler {
    pub fn new(
        repository: Arc<dyn SessionStoreRepository>,
        exporters: Vec<Arc<dyn StoreExporter>>,
        settings: ExportSettings,
    ) -> Self {
        Self {
            repository,
            exporters,
            settings,
        }
    }

    /// # Errors
    ///
    /// - `Session(NotFound)` if the session doesn't exist
    /// - `Export(FormatDisabled)` for spreadsheets when switched off
    /// - `Export(UnsupportedFormat)` if no exporter handles the format
    /// - `Export(..)` encoding failures, logged here with full detail
    pub async fn handle(
        &self,
        query: ExportSessionQuery,
    ) -> Result<ExportedFile, ExportSessionError> {
        if query.format == ExportFormat::Xlsx && !self.settings.spreadsheet_enabled {
            return Err(ExportError::FormatDisabled(query.format).into());
        }

        let exporter = self
            .exporters
            .iter()
            .find(|e| e.format() == query.format)
            .ok_or_else(|| ExportError::UnsupportedFormat(query.format.to_string()))?;

        let store = load_store(self.repository.as_ref(), &query.session_id).await?;
        let exported_at = Timestamp::now();

        let content = exporter.export(&store, &exported_at).await.map_err(|e| {
            tracing::error!(
                session_id = %query.session_id,
                format = %query.format,
                error = %e,
                "Export failed"
            );
            e
        })?;

        tracing::info!(
            session_id = %query.session_id,
            format = %query.format,
            bytes = content.len(),
            "Session exported"
        );
        Ok(ExportedFile::new(
            content,
            query.format,
            &self.settings.filename_prefix,
            &exported_at,
        ))
    }
}
