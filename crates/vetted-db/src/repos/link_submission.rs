//! Link submission repository: code of conduct, diversity statement, and
//! problematic conduct evidence.

use vetted_core::entities::LinkSubmission;
use vetted_core::enums::{AuditAction, EntityType, LinkTag};
use vetted_core::ids::PREFIX_LINK_SUBMISSION;
use vetted_core::validation::check_short_text;

use crate::error::DatabaseError;
use crate::helpers::{
    format_datetime, get_bool, get_opt_string, get_verification, now, parse_datetime, parse_enum,
};
use crate::service::VettedService;

const SELECT_COLS: &str =
    "id, project_id, user_id, tag, url, project_has_tag, created_at, verified_at, verified_by";

fn row_to_link_submission(row: &libsql::Row) -> Result<LinkSubmission, DatabaseError> {
    Ok(LinkSubmission {
        id: row.get::<String>(0)?,
        project_id: row.get::<String>(1)?,
        user_id: row.get::<String>(2)?,
        tag: parse_enum(&row.get::<String>(3)?)?,
        url: get_opt_string(row, 4)?,
        project_has_tag: get_bool(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        verification: get_verification(row, 7, 8)?,
    })
}

impl VettedService {
    /// Record evidence about a project's tag.
    ///
    /// `url` may be `None` together with `project_has_tag == false` to record
    /// that the project lacks the tag.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` if the URL exceeds 256 characters, or
    /// `DatabaseError::LibSql` if the project does not exist.
    pub async fn create_link_submission(
        &self,
        project_id: &str,
        user_id: &str,
        tag: LinkTag,
        url: Option<&str>,
        project_has_tag: bool,
    ) -> Result<LinkSubmission, DatabaseError> {
        check_short_text("url", url)?;
        let now = now();
        let id = self.db().generate_id(PREFIX_LINK_SUBMISSION).await?;

        self.db().conn().execute(
            "INSERT INTO link_submissions (id, project_id, user_id, tag, url, project_has_tag, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            libsql::params![
                id.as_str(),
                project_id,
                user_id,
                tag.as_str(),
                url,
                i64::from(project_has_tag),
                format_datetime(&now)
            ],
        ).await?;

        let sub = LinkSubmission {
            id: id.clone(),
            project_id: project_id.to_string(),
            user_id: user_id.to_string(),
            tag,
            url: url.map(String::from),
            project_has_tag,
            created_at: now,
            verification: None,
        };

        self.record_audit(
            EntityType::LinkSubmission,
            &id,
            AuditAction::Created,
            Some(user_id),
            None,
            now,
        )
        .await?;

        tracing::debug!(%id, project_id, tag = %tag, "created link submission");
        Ok(sub)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the submission does not exist.
    pub async fn get_link_submission(&self, id: &str) -> Result<LinkSubmission, DatabaseError> {
        let sql = format!("SELECT {SELECT_COLS} FROM link_submissions WHERE id = ?1");
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityType::LinkSubmission, id))?;
        row_to_link_submission(&row)
    }

    /// Link submissions for a project, newest first, optionally restricted to one tag.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_link_submissions(
        &self,
        project_id: &str,
        tag: Option<LinkTag>,
    ) -> Result<Vec<LinkSubmission>, DatabaseError> {
        let mut rows = if let Some(tag) = tag {
            let sql = format!(
                "SELECT {SELECT_COLS} FROM link_submissions WHERE project_id = ?1 AND tag = ?2
                 ORDER BY created_at DESC, rowid DESC"
            );
            self.db()
                .conn()
                .query(&sql, libsql::params![project_id, tag.as_str()])
                .await?
        } else {
            let sql = format!(
                "SELECT {SELECT_COLS} FROM link_submissions WHERE project_id = ?1
                 ORDER BY created_at DESC, rowid DESC"
            );
            self.db().conn().query(&sql, [project_id]).await?
        };

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_link_submission(&row)?);
        }
        Ok(items)
    }

    /// Verified link submissions for a project, newest verification first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn verified_link_submissions(
        &self,
        project_id: &str,
    ) -> Result<Vec<LinkSubmission>, DatabaseError> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM link_submissions
             WHERE project_id = ?1 AND verified_at IS NOT NULL
             ORDER BY verified_at DESC, rowid DESC"
        );
        let mut rows = self.db().conn().query(&sql, [project_id]).await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_link_submission(&row)?);
        }
        Ok(items)
    }

    /// Unverified link submissions across all projects, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn pending_link_submissions(
        &self,
        limit: u32,
    ) -> Result<Vec<LinkSubmission>, DatabaseError> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM link_submissions WHERE verified_at IS NULL
             ORDER BY created_at ASC, rowid ASC LIMIT {limit}"
        );
        let mut rows = self.db().conn().query(&sql, ()).await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_link_submission(&row)?);
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
            .create_link_submission(
                &project.id,
                "user-1",
                LinkTag::CodeOfConduct,
                Some("https://example.org/coc"),
                true,
            )
            .await
            .unwrap();
        assert!(sub.id.starts_with("lsb-"));

        let fetched = svc.get_link_submission(&sub.id).await.unwrap();
        assert_eq!(fetched, sub);
    }

    #[tokio::test]
    async fn absence_of_tag_without_url() {
        let svc = test_service().await;
        let project = test_project(&svc).await;

        let sub = svc
            .create_link_submission(&project.id, "user-1", LinkTag::DiversityStatement, None, false)
            .await
            .unwrap();

        let fetched = svc.get_link_submission(&sub.id).await.unwrap();
        assert_eq!(fetched.url, None);
        assert!(!fetched.project_has_tag);
        assert_eq!(fetched.tag.label(), "Diversity Statement");
    }

    #[tokio::test]
    async fn list_filters_by_tag() {
        let svc = test_service().await;
        let project = test_project(&svc).await;
        for tag in [
            LinkTag::CodeOfConduct,
            LinkTag::CodeOfConduct,
            LinkTag::ProblematicConduct,
        ] {
            svc.create_link_submission(&project.id, "user-1", tag, None, true)
                .await
                .unwrap();
        }

        let all = svc.list_link_submissions(&project.id, None).await.unwrap();
        assert_eq!(all.len(), 3);
        let coc = svc
            .list_link_submissions(&project.id, Some(LinkTag::CodeOfConduct))
            .await
            .unwrap();
        assert_eq!(coc.len(), 2);
        assert!(coc.iter().all(|s| s.tag == LinkTag::CodeOfConduct));
    }

    #[tokio::test]
    async fn verified_list_only_contains_verified() {
        let svc = test_service().await;
        let project = test_project(&svc).await;
        let a = svc
            .create_link_submission(&project.id, "user-1", LinkTag::CodeOfConduct, None, true)
            .await
            .unwrap();
        svc.create_link_submission(&project.id, "user-1", LinkTag::CodeOfConduct, None, false)
            .await
            .unwrap();
        svc.verify_link_submission(&a.id, "mod-1").await.unwrap();

        let verified = svc.verified_link_submissions(&project.id).await.unwrap();
        assert_eq!(verified.len(), 1);
        assert_eq!(verified[0].id, a.id);

        let pending = svc.pending_link_submissions(10).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_ne!(pending[0].id, a.id);
    }
}
