use anyhow::Context;
use vetted_config::VettedConfig;
use vetted_db::service::VettedService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: VettedService,
    pub config: VettedConfig,
}

impl AppContext {
    /// Open the configured database.
    pub async fn init(config: VettedConfig) -> anyhow::Result<Self> {
        let service = VettedService::from_config(&config.database)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;
        Ok(Self { service, config })
    }
}
