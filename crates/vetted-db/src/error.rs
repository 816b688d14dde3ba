//! Database error types for vetted-db.

use thiserror::Error;
use vetted_core::enums::EntityType;
use vetted_core::errors::CoreError;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or a column could not be decoded.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// The addressed entity does not exist.
    #[error("{entity_type} {id} not found")]
    NotFound { entity_type: EntityType, id: String },

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Field validation or state machine rejection from vetted-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Underlying libSQL error, including constraint violations.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    pub(crate) fn not_found(entity_type: EntityType, id: &str) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }
}
