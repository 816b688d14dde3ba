use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ProjectField, SubmissionKind};
use crate::verification::{Verifiable, Verification};

/// A proposed set of descriptive metadata for a project.
///
/// Each field is optional; a submission may only propose a new homepage, for
/// example. `tags` is kept as the raw string the user typed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectSubmission {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub name: Option<String>,
    pub homepage: Option<String>,
    pub tags: Option<String>,
    pub created_at: DateTime<Utc>,
    pub verification: Option<Verification>,
}

impl ProjectSubmission {
    /// Value of a descriptive field.
    #[must_use]
    pub fn field(&self, field: ProjectField) -> Option<&str> {
        match field {
            ProjectField::Name => self.name.as_deref(),
            ProjectField::Homepage => self.homepage.as_deref(),
            ProjectField::Tags => self.tags.as_deref(),
        }
    }
}

impl Verifiable for ProjectSubmission {
    const KIND: SubmissionKind = SubmissionKind::Project;

    fn verification(&self) -> Option<&Verification> {
        self.verification.as_ref()
    }
}

impl std::fmt::Display for ProjectSubmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {} Homepage: {} Tags: {}",
            self.name.as_deref().unwrap_or("None"),
            self.homepage.as_deref().unwrap_or("None"),
            self.tags.as_deref().unwrap_or("None")
        )
    }
}
