//! Moderator verification, shared by the three submission kinds.
//!
//! Verification has no precondition: verifying an already verified submission
//! overwrites the previous time and moderator. The audit entry keeps the
//! previous moderator so the overwrite stays traceable.

use chrono::{DateTime, SubsecRound, Utc};

use vetted_core::audit_detail::VerifiedDetail;
use vetted_core::entities::{LinkSubmission, ProjectSubmission, RepresentationSubmission};
use vetted_core::enums::{AuditAction, SubmissionKind, VerificationState};
use vetted_core::validation::check_transition;
use vetted_core::verification::{Verifiable, Verification};

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, now, submission_table, to_json};
use crate::service::VettedService;

impl VettedService {
    /// Mark a submission verified by `moderator` at the current time.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no submission of `kind` has `id`.
    pub async fn verify_submission(
        &self,
        kind: SubmissionKind,
        id: &str,
        moderator: &str,
    ) -> Result<Verification, DatabaseError> {
        self.verify_submission_at(kind, id, moderator, now()).await
    }

    /// Mark a submission verified by `moderator` at `at`.
    ///
    /// `at` is truncated to the stored microsecond precision before use, so
    /// the returned `Verification` equals what a later read sees.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no submission of `kind` has `id`.
    pub async fn verify_submission_at(
        &self,
        kind: SubmissionKind,
        id: &str,
        moderator: &str,
        at: DateTime<Utc>,
    ) -> Result<Verification, DatabaseError> {
        let at = at.trunc_subsecs(6);
        let table = submission_table(kind);

        let previous_verified_by = {
            let sql = format!("SELECT verified_by FROM {table} WHERE id = ?1");
            let mut rows = self.db().conn().query(&sql, [id]).await?;
            let Some(row) = rows.next().await? else {
                tracing::warn!(kind = %kind, id, moderator, "verify: submission not found");
                return Err(DatabaseError::not_found(kind.entity_type(), id));
            };
            get_opt_string(&row, 0)?
        };

        let current = if previous_verified_by.is_some() {
            VerificationState::Verified
        } else {
            VerificationState::Unverified
        };
        check_transition(kind.entity_type(), id, current, VerificationState::Verified)?;

        let sql = format!("UPDATE {table} SET verified_at = ?1, verified_by = ?2 WHERE id = ?3");
        self.db()
            .conn()
            .execute(&sql, libsql::params![format_datetime(&at), moderator, id])
            .await?;

        let detail = VerifiedDetail {
            verified_by: moderator.to_string(),
            verified_at: at,
            previous_verified_by: previous_verified_by.clone(),
        };
        self.record_audit(
            kind.entity_type(),
            id,
            AuditAction::Verified,
            Some(moderator),
            Some(to_json(&detail)?),
            at,
        )
        .await?;

        tracing::info!(
            kind = %kind,
            id,
            moderator,
            overwrote = previous_verified_by.is_some(),
            "verified submission"
        );
        Ok(Verification::new(moderator, at))
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the submission does not exist.
    pub async fn verify_project_submission(
        &self,
        id: &str,
        moderator: &str,
    ) -> Result<ProjectSubmission, DatabaseError> {
        self.verify_submission(ProjectSubmission::KIND, id, moderator)
            .await?;
        self.get_project_submission(id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the submission does not exist.
    pub async fn verify_link_submission(
        &self,
        id: &str,
        moderator: &str,
    ) -> Result<LinkSubmission, DatabaseError> {
        self.verify_submission(LinkSubmission::KIND, id, moderator)
            .await?;
        self.get_link_submission(id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the submission does not exist.
    pub async fn verify_representation_submission(
        &self,
        id: &str,
        moderator: &str,
    ) -> Result<RepresentationSubmission, DatabaseError> {
        self.verify_submission(RepresentationSubmission::KIND, id, moderator)
            .await?;
        self.get_representation_submission(id).await
    }
}
