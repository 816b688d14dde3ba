use serde_json::json;
use vetted_db::repos::project_submission::ProjectSubmissionDraft;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `vetted project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::Create {
            user,
            name,
            homepage,
            tags,
        } => {
            let draft = ProjectSubmissionDraft {
                name: name.clone(),
                homepage: homepage.clone(),
                tags: tags.clone(),
            };
            create(user, draft, ctx, flags).await
        }
        ProjectCommands::Get { id } => {
            let project = ctx.service.get_project(id).await?;
            output(&project, flags.format)
        }
        ProjectCommands::List => {
            let limit = effective_limit(None, flags, &ctx.config.general);
            let projects = ctx.service.list_projects(limit).await?;
            output(&projects, flags.format)
        }
        ProjectCommands::Profile { id } => {
            let profile = ctx.service.project_profile(id).await?;
            output(
                &json!({
                    "display_name": profile.display_name(),
                    "profile": profile,
                }),
                flags.format,
            )
        }
    }
}

async fn create(
    user: &str,
    draft: ProjectSubmissionDraft,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if draft.is_empty() {
        let project = ctx.service.create_project(user).await?;
        return output(&json!({ "project": project, "submission": null }), flags.format);
    }

    let (project, submission) = ctx.service.create_project_with_submission(user, draft).await?;
    output(
        &json!({ "project": project, "submission": submission }),
        flags.format,
    )
}
