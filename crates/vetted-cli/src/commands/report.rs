use vetted_config::GeneralConfig;
use vetted_core::entities::Report;
use vetted_core::enums::EntityType;
use vetted_core::target::ReportTarget;
use vetted_db::repos::report::ReportFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReportCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `vetted report`.
pub async fn handle(
    action: &ReportCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReportCommands::Create {
            target_type,
            target_id,
            user,
            message,
        } => {
            let report = create(
                target_type,
                target_id,
                user.as_deref(),
                message.as_deref(),
                ctx,
            )
            .await?;
            output(&report, flags.format)
        }
        ReportCommands::List {
            open,
            resolved,
            target_type,
            target_id,
            user,
        } => {
            let query = ListQuery {
                resolved: resolved_filter(*open, *resolved),
                target_type: target_type.as_deref(),
                target_id: target_id.as_deref(),
                user: user.as_deref(),
                limit: effective_limit(None, flags, &ctx.config.general),
            };
            let reports = list(&query, ctx).await?;
            output(&reports, flags.format)
        }
        ReportCommands::Resolve { id, moderator } => {
            let report = ctx.service.resolve_report(id, moderator).await?;
            output(&report, flags.format)
        }
    }
}

async fn create(
    target_type: &str,
    target_id: &str,
    user: Option<&str>,
    message: Option<&str>,
    ctx: &AppContext,
) -> anyhow::Result<Report> {
    check_reporter(&ctx.config.general, user)?;
    let entity_type = parse_enum::<EntityType>(target_type, "target-type")?;
    let target = ReportTarget::new(entity_type, target_id);
    Ok(ctx.service.create_report(target, user, message).await?)
}

struct ListQuery<'a> {
    resolved: Option<bool>,
    target_type: Option<&'a str>,
    target_id: Option<&'a str>,
    user: Option<&'a str>,
    limit: u32,
}

async fn list(query: &ListQuery<'_>, ctx: &AppContext) -> anyhow::Result<Vec<Report>> {
    let entity_type = query
        .target_type
        .map(|value| parse_enum::<EntityType>(value, "target-type"))
        .transpose()?;

    if let (Some(entity_type), Some(target_id)) = (entity_type, query.target_id) {
        let reports = ctx
            .service
            .reports_for(&ReportTarget::new(entity_type, target_id))
            .await?;
        return Ok(reports
            .into_iter()
            .filter(|report| {
                query.resolved.is_none_or(|want| report.resolved == want)
                    && query
                        .user
                        .is_none_or(|u| report.user_id.as_deref() == Some(u))
            })
            .take(usize::try_from(query.limit).unwrap_or(usize::MAX))
            .collect());
    }

    let filter = ReportFilter {
        resolved: query.resolved,
        entity_type,
        user_id: query.user.map(String::from),
        limit: Some(query.limit),
    };
    Ok(ctx.service.list_reports(&filter).await?)
}

fn check_reporter(general: &GeneralConfig, user: Option<&str>) -> anyhow::Result<()> {
    if user.is_none() && !general.anonymous_reports {
        anyhow::bail!("anonymous reports are disabled (general.anonymous_reports = false); pass --user");
    }
    Ok(())
}

const fn resolved_filter(open: bool, resolved: bool) -> Option<bool> {
    if open {
        Some(false)
    } else if resolved {
        Some(true)
    } else {
        None
    }
}
