//! Project repository and the derived display fields.
//!
//! A project row stores only its creator and creation time. Name, homepage
//! and tags are read-time projections: filter the project's submissions to
//! verified ones that set the field, order by verification time descending,
//! take the first. Ties on verification time go to the later-inserted row.

use vetted_core::entities::{AuditEntry, Project, ProjectSubmission};
use vetted_core::enums::{AuditAction, EntityType, ProjectField};
use vetted_core::ids::{PREFIX_AUDIT, PREFIX_PROJECT, PREFIX_PROJECT_SUBMISSION};
use vetted_core::profile::ProjectProfile;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, now, parse_datetime};
use crate::repos::audit::insert_audit;
use crate::repos::project_submission::{
    ProjectSubmissionDraft, SELECT_COLS as SUBMISSION_COLS, insert_project_submission,
    new_project_submission, row_to_project_submission,
};
use crate::service::VettedService;

fn row_to_project(row: &libsql::Row) -> Result<Project, DatabaseError> {
    Ok(Project {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
    })
}

/// Verified-first ordering shared by every projection query.
const VERIFIED_ORDER: &str = "ORDER BY verified_at DESC, rowid DESC";

impl VettedService {
    /// Create a project with no submissions. It displays as `No name given.`
    /// until a submission naming it is verified.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn create_project(&self, user_id: &str) -> Result<Project, DatabaseError> {
        let now = now();
        let id = self.db().generate_id(PREFIX_PROJECT).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO projects (id, user_id, created_at) VALUES (?1, ?2, ?3)",
                libsql::params![id.as_str(), user_id, format_datetime(&now)],
            )
            .await?;

        self.record_audit(EntityType::Project, &id, AuditAction::Created, Some(user_id), None, now)
            .await?;

        tracing::debug!(%id, user_id, "created project");
        Ok(Project {
            id,
            user_id: user_id.to_string(),
            created_at: now,
        })
    }

    /// Create a project together with its first submission in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any INSERT fails, including the audit rows;
    /// nothing is stored then.
    pub async fn create_project_with_submission(
        &self,
        user_id: &str,
        draft: ProjectSubmissionDraft,
    ) -> Result<(Project, ProjectSubmission), DatabaseError> {
        let now = now();
        let project_id = self.db().generate_id(PREFIX_PROJECT).await?;
        let submission_id = self.db().generate_id(PREFIX_PROJECT_SUBMISSION).await?;

        let project = Project {
            id: project_id.clone(),
            user_id: user_id.to_string(),
            created_at: now,
        };
        let submission = new_project_submission(submission_id, &project_id, user_id, draft, now);

        let created = |entity_type: EntityType, entity_id: &str, id: String| AuditEntry {
            id,
            entity_type,
            entity_id: entity_id.to_string(),
            action: AuditAction::Created,
            actor: Some(user_id.to_string()),
            detail: None,
            created_at: now,
        };
        let audit = [
            created(
                EntityType::Project,
                &project.id,
                self.db().generate_id(PREFIX_AUDIT).await?,
            ),
            created(
                EntityType::ProjectSubmission,
                &submission.id,
                self.db().generate_id(PREFIX_AUDIT).await?,
            ),
        ];

        let tx = self.db().conn().transaction().await?;
        let inserted: Result<(), DatabaseError> = async {
            tx.execute(
                "INSERT INTO projects (id, user_id, created_at) VALUES (?1, ?2, ?3)",
                libsql::params![project.id.as_str(), user_id, format_datetime(&now)],
            )
            .await?;
            insert_project_submission(&tx, &submission).await?;
            for entry in &audit {
                insert_audit(&tx, entry).await?;
            }
            Ok(())
        }
        .await;
        if let Err(e) = inserted {
            tx.rollback().await?;
            return Err(e);
        }
        tx.commit().await?;

        tracing::debug!(id = %project.id, submission = %submission.id, "created project with submission");
        Ok((project, submission))
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the project does not exist.
    pub async fn get_project(&self, id: &str) -> Result<Project, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, user_id, created_at FROM projects WHERE id = ?1", [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityType::Project, id))?;
        row_to_project(&row)
    }

    /// Projects ordered by creation date descending.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_projects(&self, limit: u32) -> Result<Vec<Project>, DatabaseError> {
        let sql = format!(
            "SELECT id, user_id, created_at FROM projects ORDER BY created_at DESC, rowid DESC LIMIT {limit}"
        );
        let mut rows = self.db().conn().query(&sql, ()).await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_project(&row)?);
        }
        Ok(items)
    }

    /// The project's verified submissions, newest verification first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn verified_submissions(
        &self,
        project_id: &str,
    ) -> Result<Vec<ProjectSubmission>, DatabaseError> {
        let sql = format!(
            "SELECT {SUBMISSION_COLS} FROM project_submissions
             WHERE project_id = ?1 AND verified_at IS NOT NULL {VERIFIED_ORDER}"
        );
        let mut rows = self.db().conn().query(&sql, [project_id]).await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_project_submission(&row)?);
        }
        Ok(items)
    }

    /// The most recently verified submission that sets `field`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn project_field(
        &self,
        project_id: &str,
        field: ProjectField,
    ) -> Result<Option<ProjectSubmission>, DatabaseError> {
        let column = field.as_str();
        let sql = format!(
            "SELECT {SUBMISSION_COLS} FROM project_submissions
             WHERE project_id = ?1 AND verified_at IS NOT NULL AND {column} IS NOT NULL
             {VERIFIED_ORDER} LIMIT 1"
        );
        let mut rows = self.db().conn().query(&sql, [project_id]).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_project_submission(&row)?)),
            None => Ok(None),
        }
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn project_name(
        &self,
        project_id: &str,
    ) -> Result<Option<ProjectSubmission>, DatabaseError> {
        self.project_field(project_id, ProjectField::Name).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn project_homepage(
        &self,
        project_id: &str,
    ) -> Result<Option<ProjectSubmission>, DatabaseError> {
        self.project_field(project_id, ProjectField::Homepage).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn project_tags(
        &self,
        project_id: &str,
    ) -> Result<Option<ProjectSubmission>, DatabaseError> {
        self.project_field(project_id, ProjectField::Tags).await
    }

    /// The project with all three display fields resolved.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the project does not exist.
    pub async fn project_profile(&self, project_id: &str) -> Result<ProjectProfile, DatabaseError> {
        let project = self.get_project(project_id).await?;
        let verified = self.verified_submissions(project_id).await?;
        Ok(ProjectProfile::resolve(project, &verified))
    }
}
