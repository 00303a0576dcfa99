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
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Minimum confidence must be in [0.6, 1), got {0}")]
    InvalidMinConfidence(f64),

    #[error("History window must be at least 1")]
    InvalidHistoryWindow,

    #[error("Metric window must be at least 1")]
    InvalidMetricWindow,

    #[error("Log level must not be empty")]
    EmptyLogLevel,

    #[error("Snapshot path must end in .json, .yaml or .yml: {0}")]
    UnsupportedSnapshotPath(String),
}
