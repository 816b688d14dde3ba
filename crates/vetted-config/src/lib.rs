//! # vetted-config
//!
//! Layered configuration loading for vetted using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VETTED_*` prefix, `__` as separator)
//! 2. Project-level `.vetted/config.toml`
//! 3. User-level `~/.config/vetted/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `VETTED_DATABASE__PATH` -> `database.path`,
//! `VETTED_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`.
//!
//! ```no_run
//! use vetted_config::VettedConfig;
//!
//! let config = VettedConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod database;
mod error;
mod general;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VettedConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl VettedConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction or validation fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment (tests layer their own
    /// providers on top of [`Self::figment`]).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".vetted/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("VETTED_").split("__"))
    }

    /// # Errors
    ///
    /// Returns the first section's `ConfigError::InvalidValue`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        self.general.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vetted").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = VettedConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = VettedConfig::from_figment(&VettedConfig::figment())
                .expect("should extract defaults");
            assert_eq!(config.database.path, ".vetted/vetted.db");
            assert!(config.database.foreign_keys);
            Ok(())
        });
    }
}
