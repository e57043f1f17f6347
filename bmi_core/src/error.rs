//! Error types for the bmi_core library.

use crate::services::ServiceError;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for bmi_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Height or weight missing, non-numeric, or out of range.
    /// The message is meant to be shown to the user as-is.
    #[error("{0}")]
    InvalidInput(String),

    /// An action needed a computed result but none exists yet
    #[error("No BMI result to share yet.")]
    NoResult,

    /// A platform service (notification, share, camera) failed
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),
}
