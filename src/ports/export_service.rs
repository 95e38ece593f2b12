//! Export port - encoding a whole session store into a downloadable file.
//!
//! Adapters implement `StoreExporter` once per format; the export handler
//! picks the one matching the requested `ExportFormat`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::Timestamp;
use crate::domain::session::SessionStore;

/// Port for encoding a session store.
///
/// # Contract
///
/// Implementations must:
/// - Include the identification, analysis and market data in full
/// - Stamp the output with `exported_at` where the format carries a date
/// - Leave the store untouched
#[async_trait]
pub trait StoreExporter: Send + Sync {
    /// The format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Encode the store.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if encoding fails.
    async fn export(
        &self,
        store: &SessionStore,
        exported_at: &Timestamp,
    ) -> Result<Vec<u8>, ExportError>;
}

/// Export formats offered for session data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Json,
    /// Excel workbook.
    Xlsx,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported file with content and download metadata.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub content: Vec<u8>,
    pub content_type: String,
    /// Suggested filename, e.g. `siama_data_20240305_093000.json`.
    pub filename: String,
    pub format: ExportFormat,
}

impl ExportedFile {
    /// Create a new exported file named `{prefix}_{YYYYMMDD_HHMMSS}.{ext}`.
    pub fn new(
        content: Vec<u8>,
        format: ExportFormat,
        prefix: &str,
        exported_at: &Timestamp,
    ) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}_{}.{}", prefix, exported_at.compact(), format.extension()),
            format,
        }
    }
}

/// Errors that can occur during export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// The format exists but is switched off in configuration.
    #[error("Export format disabled: {0}")]
    FormatDisabled(ExportFormat),

    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    #[error("Spreadsheet encoding failed: {0}")]
    EncodingFailed(String),
}

impl ExportError {
    /// Message safe to show to end users.
    pub fn user_message(&self) -> String {
        match self {
            ExportError::UnsupportedFormat(f) => format!("Unsupported export format: {}", f),
            ExportError::FormatDisabled(f) => format!("Export to {} is not enabled", f),
            ExportError::SerializationFailed(_) | ExportError::EncodingFailed(_) => {
                "Error creating export file".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("xlsx".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
        assert_eq!("excel".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
        assert!(matches!(
            "pdf".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn exported_file_is_named_with_compact_timestamp() {
        let at = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap());
        let file = ExportedFile::new(b"{}".to_vec(), ExportFormat::Json, "siama_data", &at);

        assert_eq!(file.filename, "siama_data_20240305_093000.json");
        assert_eq!(file.content_type, "application/json");
    }

    #[test]
    fn encoding_failures_hide_details_from_users() {
        let err = ExportError::EncodingFailed("zip writer closed".to_string());
        assert_eq!(err.user_message(), "Error creating export file");
        assert!(err.to_string().contains("zip writer closed"));
    }

    #[test]
    fn store_exporter_is_object_safe() {
        fn _accepts_dyn(_exporter: &dyn StoreExporter) {}
    }
}
