//! Row cap resolution for the listing commands.

use vetted_config::GeneralConfig;

use crate::cli::GlobalFlags;

/// The subcommand's own `--limit` wins, then the global `--limit`, then
/// `general.default_limit` from config.
#[must_use]
pub fn effective_limit(local: Option<u32>, flags: &GlobalFlags, general: &GeneralConfig) -> u32 {
    local.or(flags.limit).unwrap_or(general.default_limit)
}

#[cfg(test)]
mod tests {
    use vetted_config::GeneralConfig;

    use super::effective_limit;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(limit: Option<u32>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit,
            quiet: false,
            verbose: false,
            db: None,
        }
    }

    #[test]
    fn subcommand_limit_beats_global_flag() {
        let general = GeneralConfig::default();
        assert_eq!(effective_limit(Some(5), &flags(Some(10)), &general), 5);
        assert_eq!(effective_limit(None, &flags(Some(10)), &general), 10);
    }

    #[test]
    fn config_default_applies_without_flags() {
        let general = GeneralConfig {
            default_limit: 7,
            ..GeneralConfig::default()
        };
        assert_eq!(effective_limit(None, &flags(None), &general), 7);
    }
}
