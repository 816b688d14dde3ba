//! # vetted-db
//!
//! libSQL storage for vetted: projects, the three submission kinds, reports,
//! and the moderation audit trail.
//!
//! Project display fields are never stored. They are read-time projections
//! over verified project submissions (see `repos::project`).

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
///
/// Wraps a libSQL database and its single connection.
pub struct VettedDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl VettedDb {
    /// Open a local database at the given path with foreign keys enforced.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Self::open_local_with(path, true).await
    }

    /// Open a local database, choosing whether foreign keys are enforced.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local_with(path: &str, foreign_keys: bool) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Must be set per connection in SQLite
        let pragma = if foreign_keys {
            "PRAGMA foreign_keys = ON"
        } else {
            "PRAGMA foreign_keys = OFF"
        };
        conn.execute(pragma, ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let vetted_db = Self { db, conn };
        vetted_db.run_migrations().await?;
        tracing::debug!(path, foreign_keys, "opened database");
        Ok(vetted_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"prj-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT ?1 || '-' || lower(hex(randomblob(4)))", [prefix])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }

    /// Whether a row with `id` exists in `table`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn exists(&self, table: &str, id: &str) -> Result<bool, DatabaseError> {
        let sql = format!("SELECT 1 FROM {table} WHERE id = ?1");
        let mut rows = self.conn.query(&sql, [id]).await?;
        Ok(rows.next().await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    async fn test_db() -> VettedDb {
        VettedDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = [
            "projects",
            "project_submissions",
            "link_submissions",
            "representation_submissions",
            "reports",
            "audit_trail",
        ];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("prj").await.unwrap();
        assert!(id.starts_with("prj-"), "ID should start with 'prj-': {id}");
        assert_eq!(id.len(), 12, "ID should be 12 chars: {id}");

        let hex_part = &id[4..];
        assert!(
            hex_part.chars().all(|c| c.is_ascii_hexdigit()),
            "Random part should be hex: {hex_part}"
        );
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in vetted_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn half_set_verification_is_rejected() {
        let db = test_db().await;
        db.conn()
            .execute(
                "INSERT INTO projects (id, user_id, created_at) VALUES ('prj-t1', 'u1', '2026-01-01T00:00:00.000000Z')",
                (),
            )
            .await
            .unwrap();

        let result = db
            .conn()
            .execute(
                "INSERT INTO project_submissions (id, project_id, user_id, created_at, verified_at)
                 VALUES ('psb-t1', 'prj-t1', 'u1', '2026-01-01T00:00:00.000000Z', '2026-01-02T00:00:00.000000Z')",
                (),
            )
            .await;
        assert!(result.is_err(), "verified_at without verified_by must fail");
    }

    #[tokio::test]
    async fn submission_requires_existing_project() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO link_submissions (id, project_id, user_id, tag, created_at)
                 VALUES ('lsb-t1', 'prj-missing', 'u1', 'code_of_conduct', '2026-01-01T00:00:00.000000Z')",
                (),
            )
            .await;
        assert!(result.is_err(), "foreign key should reject unknown project");
    }

    #[tokio::test]
    async fn foreign_keys_can_be_disabled() {
        let db = VettedDb::open_local_with(":memory:", false).await.unwrap();
        db.conn()
            .execute(
                "INSERT INTO link_submissions (id, project_id, user_id, tag, created_at)
                 VALUES ('lsb-t1', 'prj-missing', 'u1', 'code_of_conduct', '2026-01-01T00:00:00.000000Z')",
                (),
            )
            .await
            .unwrap();
        assert!(db.exists("link_submissions", "lsb-t1").await.unwrap());
    }

    #[tokio::test]
    async fn link_tag_check_constraint() {
        let db = test_db().await;
        db.conn()
            .execute(
                "INSERT INTO projects (id, user_id, created_at) VALUES ('prj-t1', 'u1', '2026-01-01T00:00:00.000000Z')",
                (),
            )
            .await
            .unwrap();
        let result = db
            .conn()
            .execute(
                "INSERT INTO link_submissions (id, project_id, user_id, tag, created_at)
                 VALUES ('lsb-t1', 'prj-t1', 'u1', 'COC', '2026-01-01T00:00:00.000000Z')",
                (),
            )
            .await;
        assert!(result.is_err());
    }
}
