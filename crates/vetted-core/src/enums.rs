//! Entity types, link tags, submission kinds, and the verification state machine.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! and `as_str()` returns the exact string stored in SQL.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Every stored record type. Reports may target any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Project,
    ProjectSubmission,
    LinkSubmission,
    RepresentationSubmission,
    Report,
}

impl EntityType {
    pub const ALL: [Self; 5] = [
        Self::Project,
        Self::ProjectSubmission,
        Self::LinkSubmission,
        Self::RepresentationSubmission,
        Self::Report,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::ProjectSubmission => "project_submission",
            Self::LinkSubmission => "link_submission",
            Self::RepresentationSubmission => "representation_submission",
            Self::Report => "report",
        }
    }

    /// The submission kind this entity type corresponds to, if any.
    #[must_use]
    pub const fn submission_kind(self) -> Option<SubmissionKind> {
        match self {
            Self::ProjectSubmission => Some(SubmissionKind::Project),
            Self::LinkSubmission => Some(SubmissionKind::Link),
            Self::RepresentationSubmission => Some(SubmissionKind::Representation),
            Self::Project | Self::Report => None,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SubmissionKind
// ---------------------------------------------------------------------------

/// The three verifiable submission kinds. Verification behaves identically
/// for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    Project,
    Link,
    Representation,
}

impl SubmissionKind {
    pub const ALL: [Self; 3] = [Self::Project, Self::Link, Self::Representation];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Link => "link",
            Self::Representation => "representation",
        }
    }

    #[must_use]
    pub const fn entity_type(self) -> EntityType {
        match self {
            Self::Project => EntityType::ProjectSubmission,
            Self::Link => EntityType::LinkSubmission,
            Self::Representation => EntityType::RepresentationSubmission,
        }
    }
}

impl fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LinkTag
// ---------------------------------------------------------------------------

/// What a link submission is evidence of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LinkTag {
    CodeOfConduct,
    DiversityStatement,
    ProblematicConduct,
}

impl LinkTag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CodeOfConduct => "code_of_conduct",
            Self::DiversityStatement => "diversity_statement",
            Self::ProblematicConduct => "problematic_conduct",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CodeOfConduct => "Code of Conduct",
            Self::DiversityStatement => "Diversity Statement",
            Self::ProblematicConduct => "Problematic Conduct",
        }
    }
}

impl fmt::Display for LinkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProjectField
// ---------------------------------------------------------------------------

/// The descriptive fields of a project, each derived independently from
/// verified project submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Name,
    Homepage,
    Tags,
}

impl ProjectField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Homepage, Self::Tags];

    /// Column name in `project_submissions`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Homepage => "homepage",
            Self::Tags => "tags",
        }
    }
}

impl fmt::Display for ProjectField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VerificationState
// ---------------------------------------------------------------------------

/// Verification state of a submission.
///
/// ```text
/// unverified → verified → verified (re-verification overwrites)
/// ```
///
/// There is no rejected state: a rejected submission simply stays unverified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VerificationState {
    Unverified,
    Verified,
}

impl VerificationState {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Unverified | Self::Verified => &[Self::Verified],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unverified => "unverified",
            Self::Verified => "verified",
        }
    }
}

impl fmt::Display for VerificationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditAction
// ---------------------------------------------------------------------------

/// What happened to an entity, as recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Created,
    Verified,
    Reported,
    Resolved,
}

impl AuditAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Verified => "verified",
            Self::Reported => "reported",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
