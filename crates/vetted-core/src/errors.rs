//! Cross-cutting error types for vetted.
//!
//! Storage errors (`DatabaseError`) live in `vetted-db`, configuration errors
//! in `vetted-config`. The CLI converges all of them into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any vetted crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
