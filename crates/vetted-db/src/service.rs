//! Service layer hosting every repository method.
//!
//! `VettedService` wraps `VettedDb`. All repo methods are implemented as
//! `impl VettedService` blocks under `repos/`.

use vetted_config::DatabaseConfig;

use crate::VettedDb;
use crate::error::DatabaseError;

/// Orchestrates database mutations together with their audit entries.
///
/// Every mutation method follows this protocol:
/// 1. Execute SQL
/// 2. Append an audit entry
/// 3. Return the refreshed entity
pub struct VettedService {
    db: VettedDb,
}

impl VettedService {
    /// Create a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = VettedDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create a service from the `[database]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the parent directory cannot be created or
    /// the database cannot be opened.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if !config.is_in_memory() {
            if let Some(parent) = std::path::Path::new(&config.path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| DatabaseError::Other(e.into()))?;
                }
            }
        }
        let db = VettedDb::open_local_with(&config.path, config.foreign_keys).await?;
        Ok(Self { db })
    }

    /// Create from an existing `VettedDb`.
    #[must_use]
    pub const fn from_db(db: VettedDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &VettedDb {
        &self.db
    }
}
