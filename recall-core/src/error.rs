//! Error types for the recall core library.

use thiserror::Error;

/// Top-level error type for all recall-core operations.
#[derive(Error, Debug)]
pub enum RecallError {
    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A configuration value is outside its valid range.
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Dotted path of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Serialization or deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, RecallError>;
