//! Core error types for habitrack-core.
//!
//! Only genuinely exceptional conditions live here. Acting on a habit that
//! does not exist, or adding a name that is already taken, are ordinary
//! outcomes reported through return values (`false`, `None`, `0`).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Habit/session file errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A constructor received a value it can never accept.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument { field: String, message: String },
}

impl ValidationError {
    pub(crate) fn empty_habit_name() -> Self {
        ValidationError::InvalidArgument {
            field: "name".to_string(),
            message: "habit name cannot be empty".to_string(),
        }
    }
}

/// Errors from reading or writing the habit and session files.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read a data file that exists
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a data file
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A completion date inside a habit record is not `YYYY-MM-DD`
    #[error("Invalid completion date '{value}' for habit '{habit}': {source}")]
    InvalidDate {
        habit: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The file is valid JSON but a record has the wrong shape
    #[error("Malformed habit file {path}: {source}")]
    MalformedRecord {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A habit record violates a Habit invariant
    #[error("Invalid habit record: {0}")]
    InvalidRecord(#[from] ValidationError),

    /// Failed to serialize the document
    #[error("Failed to serialize data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not name a configuration field
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
