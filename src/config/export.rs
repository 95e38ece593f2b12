//! Export configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Settings for downloadable data files
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Leading part of generated filenames, before the timestamp
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,

    /// Offer the spreadsheet export; JSON is always available
    #[serde(default = "default_spreadsheet_enabled")]
    pub spreadsheet_enabled: bool,
}

impl ExportConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.filename_prefix.is_empty() {
            return Err(ValidationError::EmptyFilenamePrefix);
        }
        let allowed = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-';
        if !self.filename_prefix.chars().all(allowed) {
            return Err(ValidationError::InvalidFilenamePrefix(
                self.filename_prefix.clone(),
            ));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename_prefix: default_filename_prefix(),
            spreadsheet_enabled: default_spreadsheet_enabled(),
        }
    }
}

fn default_filename_prefix() -> String {
    "siama_data".to_string()
}

fn default_spreadsheet_enabled() -> bool {
    true
}
