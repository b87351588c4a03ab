//! Error types for a3s-cronexpr

use crate::field::FieldError;
use thiserror::Error;

/// Errors that can occur while handling cron expressions
#[derive(Debug, Error)]
pub enum CronError {
    /// The expression did not split into exactly five fields
    #[error("Invalid cron expression: must have exactly 5 fields")]
    FieldCount {
        /// Number of whitespace-separated tokens actually found
        found: usize,
    },

    /// A single field failed validation
    #[error("{field}: {source}")]
    Field {
        /// Display name of the offending field (e.g. "Day of Month")
        field: &'static str,
        #[source]
        source: FieldError,
    },

    /// Unknown field name (expected minute, hour, dayOfMonth, month or dayOfWeek)
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for cron operations
pub type Result<T> = std::result::Result<T, CronError>;
