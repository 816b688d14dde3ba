use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Project { action } => commands::project::handle(&action, ctx, flags).await,
        Commands::Submission { action } => commands::submission::handle(&action, ctx, flags).await,
        Commands::Report { action } => commands::report::handle(&action, ctx, flags).await,
        Commands::Audit(args) => commands::audit::handle(&args, ctx, flags).await,
        Commands::Init => anyhow::bail!("init is handled before the database is opened"),
    }
}
