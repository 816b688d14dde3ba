use anyhow::Context;
use serde_json::json;
use vetted_config::VettedConfig;
use vetted_db::service::VettedService;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `vetted init`.
pub async fn handle(config: &VettedConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = &config.database.path;
    let existed = !config.database.is_in_memory() && std::path::Path::new(path).exists();

    VettedService::from_config(&config.database)
        .await
        .with_context(|| format!("failed to initialize database at {path}"))?;
    tracing::info!(path, existed, "database ready");

    output(
        &json!({
            "database": path,
            "foreign_keys": config.database.foreign_keys,
            "created": !existed,
        }),
        flags.format,
    )
}
