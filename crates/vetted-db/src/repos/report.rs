//! Report repository: abuse reports against any stored entity.

use vetted_core::audit_detail::{ReportedDetail, ResolvedDetail};
use vetted_core::entities::Report;
use vetted_core::enums::{AuditAction, EntityType};
use vetted_core::ids::PREFIX_REPORT;
use vetted_core::target::ReportTarget;

use crate::error::DatabaseError;
use crate::helpers::{
    entity_type_to_table, format_datetime, get_bool, get_opt_string, now, parse_datetime,
    parse_enum, to_json,
};
use crate::service::VettedService;

const SELECT_COLS: &str = "id, target_type, target_id, user_id, message, created_at, resolved";

/// Filter criteria for report listings.
#[derive(Debug, Default)]
pub struct ReportFilter {
    pub resolved: Option<bool>,
    pub entity_type: Option<EntityType>,
    pub user_id: Option<String>,
    pub limit: Option<u32>,
}

fn row_to_report(row: &libsql::Row) -> Result<Report, DatabaseError> {
    let target_type: EntityType = parse_enum(&row.get::<String>(1)?)?;
    Ok(Report {
        id: row.get::<String>(0)?,
        target: ReportTarget::new(target_type, row.get::<String>(2)?),
        user_id: get_opt_string(row, 3)?,
        message: get_opt_string(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        resolved: get_bool(row, 6)?,
    })
}

impl VettedService {
    /// File a report against `target`. `user_id` is `None` for anonymous
    /// reports.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the target entity does not exist.
    pub async fn create_report(
        &self,
        target: ReportTarget,
        user_id: Option<&str>,
        message: Option<&str>,
    ) -> Result<Report, DatabaseError> {
        let entity_type = target.entity_type();
        let table = entity_type_to_table(entity_type);
        if !self.db().exists(table, target.id()).await? {
            tracing::warn!(report_target = %target, "report: target not found");
            return Err(DatabaseError::not_found(entity_type, target.id()));
        }

        let now = now();
        let id = self.db().generate_id(PREFIX_REPORT).await?;

        self.db().conn().execute(
            "INSERT INTO reports (id, target_type, target_id, user_id, message, created_at, resolved)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0)",
            libsql::params![
                id.as_str(),
                entity_type.as_str(),
                target.id(),
                user_id,
                message,
                format_datetime(&now)
            ],
        ).await?;

        self.record_audit(EntityType::Report, &id, AuditAction::Created, user_id, None, now)
            .await?;
        let detail = ReportedDetail {
            report_id: id.clone(),
            anonymous: user_id.is_none(),
        };
        self.record_audit(
            entity_type,
            target.id(),
            AuditAction::Reported,
            user_id,
            Some(to_json(&detail)?),
            now,
        )
        .await?;

        tracing::debug!(%id, report_target = %target, anonymous = user_id.is_none(), "created report");
        Ok(Report {
            id,
            target,
            user_id: user_id.map(String::from),
            message: message.map(String::from),
            created_at: now,
            resolved: false,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the report does not exist.
    pub async fn get_report(&self, id: &str) -> Result<Report, DatabaseError> {
        let sql = format!("SELECT {SELECT_COLS} FROM reports WHERE id = ?1");
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityType::Report, id))?;
        row_to_report(&row)
    }

    /// Every report filed against `target`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn reports_for(&self, target: &ReportTarget) -> Result<Vec<Report>, DatabaseError> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM reports WHERE target_type = ?1 AND target_id = ?2
             ORDER BY created_at DESC, rowid DESC"
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params![target.entity_type().as_str(), target.id()])
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_report(&row)?);
        }
        Ok(items)
    }

    /// Reports matching `filter`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_reports(&self, filter: &ReportFilter) -> Result<Vec<Report>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(resolved) = filter.resolved {
            params.push(libsql::Value::Integer(i64::from(resolved)));
            conditions.push(format!("resolved = ?{}", params.len()));
        }
        if let Some(et) = filter.entity_type {
            params.push(libsql::Value::Text(et.as_str().to_string()));
            conditions.push(format!("target_type = ?{}", params.len()));
        }
        if let Some(ref user_id) = filter.user_id {
            params.push(libsql::Value::Text(user_id.clone()));
            conditions.push(format!("user_id = ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let limit = filter.limit.unwrap_or(100);
        let sql = format!(
            "SELECT {SELECT_COLS} FROM reports {where_clause}
             ORDER BY created_at DESC, rowid DESC LIMIT {limit}"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_report(&row)?);
        }
        Ok(items)
    }

    /// Mark a report resolved. Resolving twice is a no-op apart from the
    /// audit entry.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the report does not exist.
    pub async fn resolve_report(&self, id: &str, moderator: &str) -> Result<Report, DatabaseError> {
        let current = match self.get_report(id).await {
            Ok(report) => report,
            Err(e @ DatabaseError::NotFound { .. }) => {
                tracing::warn!(id, moderator, "resolve: report not found");
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        self.db()
            .conn()
            .execute("UPDATE reports SET resolved = 1 WHERE id = ?1", [id])
            .await?;

        let detail = ResolvedDetail {
            target_type: current.target.entity_type().to_string(),
            target_id: current.target.id().to_string(),
            already_resolved: current.resolved,
        };
        self.record_audit(
            EntityType::Report,
            id,
            AuditAction::Resolved,
            Some(moderator),
            Some(to_json(&detail)?),
            now(),
        )
        .await?;

        tracing::info!(id, moderator, report_target = %current.target, "resolved report");
        Ok(Report {
            resolved: true,
            ..current
        })
    }
}
