//! Application configuration module
//!
//! Configuration is read from environment variables with the `SIAMA`
//! prefix; nested values use double underscores as separators. Every
//! field has a default, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use siama_toolbox::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("Listening on {}", config.server.socket_addr()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod export;
mod server;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Export file naming and enabled formats
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `SIAMA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SIAMA__SERVER__SESSION_IDLE_SECS=900` -> `server.session_idle_secs = 900`
    /// - `SIAMA__EXPORT__SPREADSHEET_ENABLED=false` -> `export.spreadsheet_enabled = false`
    ///
    /// A `.env` file is read first when present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("SIAMA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.export.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; tests touching them run one at a time.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("SIAMA__SERVER__PORT");
        env::remove_var("SIAMA__SERVER__ENVIRONMENT");
        env::remove_var("SIAMA__SERVER__SESSION_IDLE_SECS");
        env::remove_var("SIAMA__EXPORT__SPREADSHEET_ENABLED");
        env::remove_var("SIAMA__EXPORT__FILENAME_PREFIX");
    }

    #[test]
    fn loads_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.export.filename_prefix, "siama_data");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_nested_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SIAMA__SERVER__PORT", "3000");
        env::set_var("SIAMA__SERVER__ENVIRONMENT", "production");
        env::set_var("SIAMA__SERVER__SESSION_IDLE_SECS", "900");
        env::set_var("SIAMA__EXPORT__SPREADSHEET_ENABLED", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.session_idle_secs, 900);
        assert!(config.is_production());
        assert!(!config.export.spreadsheet_enabled);
    }

    #[test]
    fn invalid_prefix_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SIAMA__EXPORT__FILENAME_PREFIX", "a/b");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_err());
    }
}
