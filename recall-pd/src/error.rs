//! Error types for the Prisoner's Dilemma layer.

use thiserror::Error;

/// Errors surfaced by engines and the host.
#[derive(Debug, Error)]
pub enum PdError {
    /// A decision was requested while the previous one still awaits the
    /// opponent's response. Nothing was changed.
    #[error("Decision already pending: waiting for the opponent's move")]
    DecisionPending,

    /// The requested model has no registered factory.
    #[error("No engine registered for model: {0}")]
    ModelUnavailable(&'static str),

    /// Logging could not be initialised.
    #[error("Telemetry error: {0}")]
    Telemetry(String),

    /// Error from the memory layer.
    #[error(transparent)]
    Core(#[from] recall_core::RecallError),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, PdError>;
