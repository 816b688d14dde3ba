//! Derived display state of a project.
//!
//! A project stores no name, homepage, or tags. Each field is taken from the
//! most recently verified project submission that sets it, independently per
//! field, so the three values may come from three different submissions.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Project, ProjectSubmission};
use crate::enums::ProjectField;
use crate::verification::Verifiable;

/// Shown when no verified submission names the project.
pub const NO_NAME_LABEL: &str = "No name given.";

/// First verified submission in `newest_first` that sets `field`.
///
/// `newest_first` must already be ordered by verification time, newest first.
/// Unverified entries are skipped.
#[must_use]
pub fn latest_with_field(
    newest_first: &[ProjectSubmission],
    field: ProjectField,
) -> Option<&ProjectSubmission> {
    newest_first
        .iter()
        .filter(|s| s.is_verified())
        .find(|s| s.field(field).is_some())
}

/// A project together with the submissions its display fields resolve to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectProfile {
    pub project: Project,
    pub name: Option<ProjectSubmission>,
    pub homepage: Option<ProjectSubmission>,
    pub tags: Option<ProjectSubmission>,
}

impl ProjectProfile {
    /// Resolve every field from the project's verified submissions,
    /// ordered newest first.
    #[must_use]
    pub fn resolve(project: Project, newest_first: &[ProjectSubmission]) -> Self {
        let pick = |field| latest_with_field(newest_first, field).cloned();
        Self {
            name: pick(ProjectField::Name),
            homepage: pick(ProjectField::Homepage),
            tags: pick(ProjectField::Tags),
            project,
        }
    }

    /// The submission a field currently resolves to.
    #[must_use]
    pub const fn source(&self, field: ProjectField) -> Option<&ProjectSubmission> {
        match field {
            ProjectField::Name => self.name.as_ref(),
            ProjectField::Homepage => self.homepage.as_ref(),
            ProjectField::Tags => self.tags.as_ref(),
        }
    }

    /// Resolved value of a field.
    #[must_use]
    pub fn value(&self, field: ProjectField) -> Option<&str> {
        self.source(field).and_then(|s| s.field(field))
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.value(ProjectField::Name).unwrap_or(NO_NAME_LABEL)
    }
}

impl fmt::Display for ProjectProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
