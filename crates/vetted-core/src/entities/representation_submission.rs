use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SubmissionKind;
use crate::verification::{Verifiable, Verification};

/// A claim that a project's contributors include people with some
/// representation attribute (free-text `tag`, e.g. `queer`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RepresentationSubmission {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub tag: String,
    /// Shown on the project history.
    pub public_message: Option<String>,
    /// Moderator-only: proof or contact details for the represented member.
    pub private_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub verification: Option<Verification>,
}

impl RepresentationSubmission {
    /// Copy safe to show outside the moderation queue.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            private_message: None,
            ..self.clone()
        }
    }
}

impl Verifiable for RepresentationSubmission {
    const KIND: SubmissionKind = SubmissionKind::Representation;

    fn verification(&self) -> Option<&Verification> {
        self.verification.as_ref()
    }
}
