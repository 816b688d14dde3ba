//! Database location and connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_path() -> String {
    ".vetted/vetted.db".to_string()
}

const fn default_foreign_keys() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Enforce foreign keys (`PRAGMA foreign_keys = ON`) on every connection.
    #[serde(default = "default_foreign_keys")]
    pub foreign_keys: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            foreign_keys: default_foreign_keys(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the database lives only in memory.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `path` is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
