//! Audit trail repository.
//!
//! Append-only audit entries recording every mutation, with dynamic filtering.

use chrono::{DateTime, Utc};

use vetted_core::entities::AuditEntry;
use vetted_core::enums::{AuditAction, EntityType};
use vetted_core::ids::PREFIX_AUDIT;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, parse_datetime, parse_enum, parse_optional_json};
use crate::service::VettedService;

/// Filter criteria for audit queries.
#[derive(Debug, Default)]
pub struct AuditFilter {
    pub entity_type: Option<EntityType>,
    pub entity_id: Option<String>,
    pub action: Option<AuditAction>,
    pub actor: Option<String>,
    pub limit: Option<u32>,
}

fn row_to_audit(row: &libsql::Row) -> Result<AuditEntry, DatabaseError> {
    Ok(AuditEntry {
        id: row.get::<String>(0)?,
        entity_type: parse_enum(&row.get::<String>(1)?)?,
        entity_id: row.get::<String>(2)?,
        action: parse_enum(&row.get::<String>(3)?)?,
        actor: get_opt_string(row, 4)?,
        detail: parse_optional_json(get_opt_string(row, 5)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

/// Insert an audit row on `conn`, which may be an open transaction.
pub(crate) async fn insert_audit(
    conn: &libsql::Connection,
    entry: &AuditEntry,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO audit_trail (id, entity_type, entity_id, action, actor, detail, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        libsql::params![
            entry.id.as_str(),
            entry.entity_type.as_str(),
            entry.entity_id.as_str(),
            entry.action.as_str(),
            entry.actor.as_deref(),
            entry.detail.as_ref().map(std::string::ToString::to_string).as_deref(),
            format_datetime(&entry.created_at)
        ],
    )
    .await?;
    Ok(())
}

impl VettedService {
    /// Append an audit entry.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn append_audit(&self, entry: &AuditEntry) -> Result<(), DatabaseError> {
        insert_audit(self.db().conn(), entry).await
    }

    /// Build and append an audit entry. Called by every mutation method.
    pub(crate) async fn record_audit(
        &self,
        entity_type: EntityType,
        entity_id: &str,
        action: AuditAction,
        actor: Option<&str>,
        detail: Option<serde_json::Value>,
        at: DateTime<Utc>,
    ) -> Result<(), DatabaseError> {
        let id = self.db().generate_id(PREFIX_AUDIT).await?;
        self.append_audit(&AuditEntry {
            id,
            entity_type,
            entity_id: entity_id.to_string(),
            action,
            actor: actor.map(String::from),
            detail,
            created_at: at,
        })
        .await
    }

    /// Query audit entries with optional filters, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn query_audit(&self, filter: &AuditFilter) -> Result<Vec<AuditEntry>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref et) = filter.entity_type {
            params.push(libsql::Value::Text(et.as_str().to_string()));
            conditions.push(format!("entity_type = ?{}", params.len()));
        }
        if let Some(ref eid) = filter.entity_id {
            params.push(libsql::Value::Text(eid.clone()));
            conditions.push(format!("entity_id = ?{}", params.len()));
        }
        if let Some(ref action) = filter.action {
            params.push(libsql::Value::Text(action.as_str().to_string()));
            conditions.push(format!("action = ?{}", params.len()));
        }
        if let Some(ref actor) = filter.actor {
            params.push(libsql::Value::Text(actor.clone()));
            conditions.push(format!("actor = ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let limit = filter.limit.unwrap_or(100);
        let sql = format!(
            "SELECT id, entity_type, entity_id, action, actor, detail, created_at
             FROM audit_trail {where_clause}
             ORDER BY created_at DESC, rowid DESC LIMIT {limit}"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_audit(&row)?);
        }
        Ok(entries)
    }
}
