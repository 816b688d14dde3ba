//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

const fn default_anonymous_reports() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Accept reports that carry no reporting user.
    #[serde(default = "default_anonymous_reports")]
    pub anonymous_reports: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            anonymous_reports: default_anonymous_reports(),
        }
    }
}

impl GeneralConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `default_limit` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
