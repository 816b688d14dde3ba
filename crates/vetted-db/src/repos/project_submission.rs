//! Project submission repository: proposed name/homepage/tags for a project.

use chrono::{DateTime, Utc};

use vetted_core::entities::ProjectSubmission;
use vetted_core::enums::{AuditAction, EntityType};
use vetted_core::ids::PREFIX_PROJECT_SUBMISSION;
use vetted_core::validation::check_short_text;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, get_verification, now, parse_datetime};
use crate::service::VettedService;

pub(crate) const SELECT_COLS: &str =
    "id, project_id, user_id, name, homepage, tags, created_at, verified_at, verified_by";

pub(crate) fn row_to_project_submission(
    row: &libsql::Row,
) -> Result<ProjectSubmission, DatabaseError> {
    Ok(ProjectSubmission {
        id: row.get::<String>(0)?,
        project_id: row.get::<String>(1)?,
        user_id: row.get::<String>(2)?,
        name: get_opt_string(row, 3)?,
        homepage: get_opt_string(row, 4)?,
        tags: get_opt_string(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        verification: get_verification(row, 7, 8)?,
    })
}

/// Field values proposed by a project submission. `None` leaves a field
/// unproposed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSubmissionDraft {
    pub name: Option<String>,
    pub homepage: Option<String>,
    pub tags: Option<String>,
}

impl ProjectSubmissionDraft {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Whether no field is proposed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.homepage.is_none() && self.tags.is_none()
    }
}

/// Insert on any connection, including an open transaction.
pub(crate) async fn insert_project_submission(
    conn: &libsql::Connection,
    sub: &ProjectSubmission,
) -> Result<(), DatabaseError> {
    check_short_text("name", sub.name.as_deref())?;
    check_short_text("homepage", sub.homepage.as_deref())?;
    check_short_text("tags", sub.tags.as_deref())?;

    conn.execute(
        "INSERT INTO project_submissions (id, project_id, user_id, name, homepage, tags, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        libsql::params![
            sub.id.as_str(),
            sub.project_id.as_str(),
            sub.user_id.as_str(),
            sub.name.as_deref(),
            sub.homepage.as_deref(),
            sub.tags.as_deref(),
            format_datetime(&sub.created_at)
        ],
    )
    .await?;
    Ok(())
}

pub(crate) fn new_project_submission(
    id: String,
    project_id: &str,
    user_id: &str,
    draft: ProjectSubmissionDraft,
    now: DateTime<Utc>,
) -> ProjectSubmission {
    ProjectSubmission {
        id,
        project_id: project_id.to_string(),
        user_id: user_id.to_string(),
        name: draft.name,
        homepage: draft.homepage,
        tags: draft.tags,
        created_at: now,
        verification: None,
    }
}

impl VettedService {
    /// Submit new metadata for an existing project. The submission starts
    /// unverified.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` if a field exceeds 256 characters, or
    /// `DatabaseError::LibSql` if the project does not exist (foreign key).
    pub async fn create_project_submission(
        &self,
        project_id: &str,
        user_id: &str,
        draft: ProjectSubmissionDraft,
    ) -> Result<ProjectSubmission, DatabaseError> {
        let now = now();
        let id = self.db().generate_id(PREFIX_PROJECT_SUBMISSION).await?;
        let sub = new_project_submission(id, project_id, user_id, draft, now);

        insert_project_submission(self.db().conn(), &sub).await?;
        self.record_audit(
            EntityType::ProjectSubmission,
            &sub.id,
            AuditAction::Created,
            Some(user_id),
            None,
            now,
        )
        .await?;

        tracing::debug!(id = %sub.id, project_id, "created project submission");
        Ok(sub)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the submission does not exist.
    pub async fn get_project_submission(&self, id: &str) -> Result<ProjectSubmission, DatabaseError> {
        let sql = format!("SELECT {SELECT_COLS} FROM project_submissions WHERE id = ?1");
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityType::ProjectSubmission, id))?;
        row_to_project_submission(&row)
    }

    /// Every submission for a project, verified or not, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_project_submissions(
        &self,
        project_id: &str,
    ) -> Result<Vec<ProjectSubmission>, DatabaseError> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM project_submissions WHERE project_id = ?1
             ORDER BY created_at DESC, rowid DESC"
        );
        let mut rows = self.db().conn().query(&sql, [project_id]).await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_project_submission(&row)?);
        }
        Ok(items)
    }

    /// Unverified project submissions across all projects, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn pending_project_submissions(
        &self,
        limit: u32,
    ) -> Result<Vec<ProjectSubmission>, DatabaseError> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM project_submissions WHERE verified_at IS NULL
             ORDER BY created_at ASC, rowid ASC LIMIT {limit}"
        );
        let mut rows = self.db().conn().query(&sql, ()).await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_project_submission(&row)?);
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

        let draft = ProjectSubmissionDraft {
            name: Some("Tokio".into()),
            homepage: None,
            tags: Some("rust, async".into()),
        };
        let sub = svc
            .create_project_submission(&project.id, "user-1", draft)
            .await
            .unwrap();
        assert!(sub.id.starts_with("psb-"));
        assert_eq!(sub.verification, None);

        let fetched = svc.get_project_submission(&sub.id).await.unwrap();
        assert_eq!(fetched.name.as_deref(), Some("Tokio"));
        assert_eq!(fetched.homepage, None);
        assert_eq!(fetched.tags.as_deref(), Some("rust, async"));
        assert_eq!(fetched.created_at, sub.created_at);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let svc = test_service().await;
        let result = svc.get_project_submission("psb-missing").await;
        assert!(matches!(
            result,
            Err(DatabaseError::NotFound { entity_type: EntityType::ProjectSubmission, .. })
        ));
    }

    #[tokio::test]
    async fn unknown_project_is_rejected() {
        let svc = test_service().await;
        let result = svc
            .create_project_submission("prj-missing", "user-1", ProjectSubmissionDraft::named("X"))
            .await;
        assert!(matches!(result, Err(DatabaseError::LibSql(_))));
    }

    #[tokio::test]
    async fn overlong_name_is_rejected() {
        let svc = test_service().await;
        let project = test_project(&svc).await;
        let result = svc
            .create_project_submission(
                &project.id,
                "user-1",
                ProjectSubmissionDraft::named("x".repeat(257)),
            )
            .await;
        assert!(matches!(result, Err(DatabaseError::Core(_))));
    }

    #[tokio::test]
    async fn pending_excludes_verified() {
        let svc = test_service().await;
        let project = test_project(&svc).await;
        let a = svc
            .create_project_submission(&project.id, "user-1", ProjectSubmissionDraft::named("A"))
            .await
            .unwrap();
        let b = svc
            .create_project_submission(&project.id, "user-1", ProjectSubmissionDraft::named("B"))
            .await
            .unwrap();
        svc.verify_project_submission(&a.id, "mod-1").await.unwrap();

        let pending = svc.pending_project_submissions(10).await.unwrap();
        let ids: Vec<_> = pending.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, [b.id.as_str()]);

        let all = svc.list_project_submissions(&project.id).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn draft_emptiness() {
        assert!(ProjectSubmissionDraft::default().is_empty());
        assert!(!ProjectSubmissionDraft::named("x").is_empty());
    }
}
