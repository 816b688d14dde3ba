use serde_json::{Value, json};
use vetted_core::enums::{LinkTag, SubmissionKind};
use vetted_db::repos::project_submission::ProjectSubmissionDraft;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{CreateSubmission, SubmissionCommands};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `vetted submission`.
pub async fn handle(
    action: &SubmissionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SubmissionCommands::Create { kind } => create(kind, ctx, flags).await,
        SubmissionCommands::List {
            kind,
            project,
            verified,
            tag,
        } => {
            let kind = parse_enum::<SubmissionKind>(kind, "kind")?;
            let tag = tag
                .as_deref()
                .map(|value| parse_enum::<LinkTag>(value, "tag"))
                .transpose()?;
            let listed = list(kind, project, *verified, tag, ctx).await?;
            output(&listed, flags.format)
        }
        SubmissionCommands::Pending { kind, limit } => {
            let kind = parse_enum::<SubmissionKind>(kind, "kind")?;
            let limit = effective_limit(*limit, flags, &ctx.config.general);
            let pending = pending(kind, limit, ctx).await?;
            output(&pending, flags.format)
        }
        SubmissionCommands::Verify {
            kind,
            id,
            moderator,
        } => {
            let kind = parse_enum::<SubmissionKind>(kind, "kind")?;
            let verified = verify(kind, id, moderator, ctx).await?;
            output(&verified, flags.format)
        }
    }
}

async fn create(
    kind: &CreateSubmission,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let created = match kind {
        CreateSubmission::Project {
            project,
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
            if draft.is_empty() {
                anyhow::bail!("a project submission needs at least one of --name, --homepage, --tags");
            }
            json!(ctx.service.create_project_submission(project, user, draft).await?)
        }
        CreateSubmission::Link {
            project,
            user,
            tag,
            url,
            absent,
        } => {
            let tag = parse_enum::<LinkTag>(tag, "tag")?;
            if url.is_none() && !absent {
                anyhow::bail!("a link submission needs --url unless --absent is given");
            }
            json!(
                ctx.service
                    .create_link_submission(project, user, tag, url.as_deref(), !absent)
                    .await?
            )
        }
        CreateSubmission::Representation {
            project,
            user,
            tag,
            public_message,
            private_message,
        } => json!(
            ctx.service
                .create_representation_submission(
                    project,
                    user,
                    tag,
                    public_message.as_deref(),
                    private_message.as_deref(),
                )
                .await?
        ),
    };
    output(&created, flags.format)
}

async fn list(
    kind: SubmissionKind,
    project_id: &str,
    verified: bool,
    tag: Option<LinkTag>,
    ctx: &AppContext,
) -> anyhow::Result<Value> {
    if tag.is_some() && kind != SubmissionKind::Link {
        anyhow::bail!("--tag only applies to link submissions");
    }
    // listing an unknown project is an error, not an empty list
    ctx.service.get_project(project_id).await?;

    let value = match (kind, verified) {
        (SubmissionKind::Project, false) => {
            json!(ctx.service.list_project_submissions(project_id).await?)
        }
        (SubmissionKind::Project, true) => json!(ctx.service.verified_submissions(project_id).await?),
        (SubmissionKind::Link, false) => {
            json!(ctx.service.list_link_submissions(project_id, tag).await?)
        }
        (SubmissionKind::Link, true) => {
            let mut items = ctx.service.verified_link_submissions(project_id).await?;
            if let Some(tag) = tag {
                items.retain(|item| item.tag == tag);
            }
            json!(items)
        }
        (SubmissionKind::Representation, false) => {
            json!(ctx.service.list_representation_submissions(project_id).await?)
        }
        (SubmissionKind::Representation, true) => {
            json!(ctx.service.public_representation(project_id).await?)
        }
    };
    Ok(value)
}

async fn pending(kind: SubmissionKind, limit: u32, ctx: &AppContext) -> anyhow::Result<Value> {
    let value = match kind {
        SubmissionKind::Project => json!(ctx.service.pending_project_submissions(limit).await?),
        SubmissionKind::Link => json!(ctx.service.pending_link_submissions(limit).await?),
        SubmissionKind::Representation => {
            json!(ctx.service.pending_representation_submissions(limit).await?)
        }
    };
    Ok(value)
}

async fn verify(
    kind: SubmissionKind,
    id: &str,
    moderator: &str,
    ctx: &AppContext,
) -> anyhow::Result<Value> {
    let value = match kind {
        SubmissionKind::Project => json!(ctx.service.verify_project_submission(id, moderator).await?),
        SubmissionKind::Link => json!(ctx.service.verify_link_submission(id, moderator).await?),
        SubmissionKind::Representation => {
            json!(ctx.service.verify_representation_submission(id, moderator).await?)
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vetted_config::VettedConfig;
    use vetted_core::enums::{LinkTag, SubmissionKind};
    use vetted_db::service::VettedService;

    use super::{list, pending, verify};
    use crate::context::AppContext;

    async fn test_ctx() -> AppContext {
        AppContext {
            service: VettedService::new_local(":memory:").await.unwrap(),
            config: VettedConfig::default(),
        }
    }

    #[tokio::test]
    async fn verify_moves_submission_out_of_pending() {
        let ctx = test_ctx().await;
        let project = ctx.service.create_project("user-1").await.unwrap();
        let link = ctx
            .service
            .create_link_submission(&project.id, "user-1", LinkTag::CodeOfConduct, None, false)
            .await
            .unwrap();

        let before = pending(SubmissionKind::Link, 10, &ctx).await.unwrap();
        assert_eq!(before.as_array().map(Vec::len), Some(1));

        let verified = verify(SubmissionKind::Link, &link.id, "mod-1", &ctx).await.unwrap();
        assert_eq!(verified["verification"]["verified_by"], "mod-1");

        let after = pending(SubmissionKind::Link, 10, &ctx).await.unwrap();
        assert_eq!(after.as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn list_rejects_tag_for_other_kinds() {
        let ctx = test_ctx().await;
        let project = ctx.service.create_project("user-1").await.unwrap();
        let result = list(
            SubmissionKind::Project,
            &project.id,
            false,
            Some(LinkTag::CodeOfConduct),
            &ctx,
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn list_unknown_project_fails() {
        let ctx = test_ctx().await;
        let result = list(SubmissionKind::Link, "prj-missing", false, None, &ctx).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn verified_representation_list_is_redacted() {
        let ctx = test_ctx().await;
        let project = ctx.service.create_project("user-1").await.unwrap();
        let rep = ctx
            .service
            .create_representation_submission(&project.id, "user-1", "trans", None, Some("secret"))
            .await
            .unwrap();
        verify(SubmissionKind::Representation, &rep.id, "mod-1", &ctx)
            .await
            .unwrap();

        let public = list(SubmissionKind::Representation, &project.id, true, None, &ctx)
            .await
            .unwrap();
        assert_eq!(public[0]["private_message"], serde_json::Value::Null);
    }
}
