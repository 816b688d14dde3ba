use anyhow::Context;
use vetted_config::VettedConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<VettedConfig> {
    let mut config = VettedConfig::load_with_dotenv().context("failed to load vetted config")?;
    apply_overrides(&mut config, flags);
    config.validate().context("invalid vetted config")?;
    Ok(config)
}

fn apply_overrides(config: &mut VettedConfig, flags: &GlobalFlags) {
    if let Some(db) = &flags.db {
        config.database.path.clone_from(db);
    }
}

#[cfg(test)]
mod tests {
    use super::apply_overrides;
    use crate::cli::{GlobalFlags, OutputFormat};
    use vetted_config::VettedConfig;

    fn flags(db: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: false,
            verbose: false,
            db: db.map(String::from),
        }
    }

    #[test]
    fn db_flag_overrides_config_path() {
        let mut config = VettedConfig::default();
        apply_overrides(&mut config, &flags(Some(":memory:")));
        assert_eq!(config.database.path, ":memory:");
    }

    #[test]
    fn no_flag_keeps_config_path() {
        let mut config = VettedConfig::default();
        let before = config.database.path.clone();
        apply_overrides(&mut config, &flags(None));
        assert_eq!(config.database.path, before);
    }
}
