//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Session idle timeout must be at least one second")]
    InvalidSessionIdle,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Export filename prefix must not be empty")]
    EmptyFilenamePrefix,

    #[error("Export filename prefix contains unsupported characters: {0}")]
    InvalidFilenamePrefix(String),
}
