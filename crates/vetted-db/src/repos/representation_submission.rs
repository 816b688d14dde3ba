//! Representation submission repository: contributor representation claims
//! with public and moderator-only messages.

use vetted_core::entities::RepresentationSubmission;
use vetted_core::enums::{AuditAction, EntityType};
use vetted_core::ids::PREFIX_REPRESENTATION_SUBMISSION;
use vetted_core::validation::check_short_text;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, get_verification, now, parse_datetime};
use crate::service::VettedService;

const SELECT_COLS: &str = "id, project_id, user_id, tag, public_message, private_message, created_at, verified_at, verified_by";

fn row_to_representation_submission(
    row: &libsql::Row,
) -> Result<RepresentationSubmission, DatabaseError> {
    Ok(RepresentationSubmission {
        id: row.get::<String>(0)?,
        project_id: row.get::<String>(1)?,
        user_id: row.get::<String>(2)?,
        tag: row.get::<String>(3)?,
        public_message: get_opt_string(row, 4)?,
        private_message: get_opt_string(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        verification: get_verification(row, 7, 8)?,
    })
}

impl VettedService {
    /// Claim that a project's contributors carry a representation tag.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` if the tag exceeds 256 characters, or
    /// `DatabaseError::LibSql` if the project does not exist.
    pub async fn create_representation_submission(
        &self,
        project_id: &str,
        user_id: &str,
        tag: &str,
        public_message: Option<&str>,
        private_message: Option<&str>,
    ) -> Result<RepresentationSubmission, DatabaseError> {
        check_short_text("tag", Some(tag))?;
        let now = now();
        let id = self.db().generate_id(PREFIX_REPRESENTATION_SUBMISSION).await?;

        self.db().conn().execute(
            "INSERT INTO representation_submissions (id, project_id, user_id, tag, public_message, private_message, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            libsql::params![
                id.as_str(),
                project_id,
                user_id,
                tag,
                public_message,
                private_message,
                format_datetime(&now)
            ],
        ).await?;

        let sub = RepresentationSubmission {
            id: id.clone(),
            project_id: project_id.to_string(),
            user_id: user_id.to_string(),
            tag: tag.to_string(),
            public_message: public_message.map(String::from),
            private_message: private_message.map(String::from),
            created_at: now,
            verification: None,
        };

        self.record_audit(
            EntityType::RepresentationSubmission,
            &id,
            AuditAction::Created,
            Some(user_id),
            None,
            now,
        )
        .await?;

        tracing::debug!(%id, project_id, "created representation submission");
        Ok(sub)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the submission does not exist.
    pub async fn get_representation_submission(
        &self,
        id: &str,
    ) -> Result<RepresentationSubmission, DatabaseError> {
        let sql = format!("SELECT {SELECT_COLS} FROM representation_submissions WHERE id = ?1");
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityType::RepresentationSubmission, id))?;
        row_to_representation_submission(&row)
    }

    /// Representation submissions for a project, newest first. Private
    /// messages are included; call `redacted()` before public display.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_representation_submissions(
        &self,
        project_id: &str,
    ) -> Result<Vec<RepresentationSubmission>, DatabaseError> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM representation_submissions WHERE project_id = ?1
             ORDER BY created_at DESC, rowid DESC"
        );
        let mut rows = self.db().conn().query(&sql, [project_id]).await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_representation_submission(&row)?);
        }
        Ok(items)
    }

    /// Verified representation claims for a project, redacted for public
    /// display, newest verification first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn public_representation(
        &self,
        project_id: &str,
    ) -> Result<Vec<RepresentationSubmission>, DatabaseError> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM representation_submissions
             WHERE project_id = ?1 AND verified_at IS NOT NULL
             ORDER BY verified_at DESC, rowid DESC"
        );
        let mut rows = self.db().conn().query(&sql, [project_id]).await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_representation_submission(&row)?.redacted());
        }
        Ok(items)
    }

    /// Unverified representation submissions across all projects, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn pending_representation_submissions(
        &self,
        limit: u32,
    ) -> Result<Vec<RepresentationSubmission>, DatabaseError> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM representation_submissions WHERE verified_at IS NULL
             ORDER BY created_at ASC, rowid ASC LIMIT {limit}"
        );
        let mut rows = self.db().conn().query(&sql, ()).await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_representation_submission(&row)?);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{test_project, test_service};

    #[tokio::test]
    async fn create_and_get_roundtrip() {
        let svc = test_service().await;
        let project = test_project(&svc).await;

        let sub = svc
            .create_representation_submission(
                &project.id,
                "user-1",
                "queer",
                Some("see the maintainers page"),
                Some("contact via maintainer@example.org"),
            )
            .await
            .unwrap();
        assert!(sub.id.starts_with("rsb-"));

        let fetched = svc.get_representation_submission(&sub.id).await.unwrap();
        assert_eq!(fetched, sub);
    }

    #[tokio::test]
    async fn public_view_is_verified_and_redacted() {
        let svc = test_service().await;
        let project = test_project(&svc).await;

        let shown = svc
            .create_representation_submission(&project.id, "user-1", "trans", Some("hi"), Some("secret"))
            .await
            .unwrap();
        svc.create_representation_submission(&project.id, "user-2", "fem", None, Some("secret"))
            .await
            .unwrap();
        svc.verify_representation_submission(&shown.id, "mod-1")
            .await
            .unwrap();

        let public = svc.public_representation(&project.id).await.unwrap();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].tag, "trans");
        assert_eq!(public[0].public_message.as_deref(), Some("hi"));
        assert_eq!(public[0].private_message, None);

        let all = svc.list_representation_submissions(&project.id).await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|s| s.private_message.is_some()));

        let pending = svc.pending_representation_submissions(10).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].tag, "fem");
    }
}
