//! Polymorphic report target.
//!
//! A report points at any stored entity through a `(type, id)` pair. The set
//! of reportable kinds is closed, so the reference is a tagged union rather
//! than an open string pair.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EntityType;

/// The entity a report is attached to.
///
/// Serializes as `{"type": "link_submission", "id": "lsb-..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum ReportTarget {
    Project(String),
    ProjectSubmission(String),
    LinkSubmission(String),
    RepresentationSubmission(String),
    Report(String),
}

impl ReportTarget {
    /// Build a target from its stored `(type, id)` columns.
    #[must_use]
    pub fn new(entity_type: EntityType, id: impl Into<String>) -> Self {
        let id = id.into();
        match entity_type {
            EntityType::Project => Self::Project(id),
            EntityType::ProjectSubmission => Self::ProjectSubmission(id),
            EntityType::LinkSubmission => Self::LinkSubmission(id),
            EntityType::RepresentationSubmission => Self::RepresentationSubmission(id),
            EntityType::Report => Self::Report(id),
        }
    }

    #[must_use]
    pub const fn entity_type(&self) -> EntityType {
        match self {
            Self::Project(_) => EntityType::Project,
            Self::ProjectSubmission(_) => EntityType::ProjectSubmission,
            Self::LinkSubmission(_) => EntityType::LinkSubmission,
            Self::RepresentationSubmission(_) => EntityType::RepresentationSubmission,
            Self::Report(_) => EntityType::Report,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Project(id)
            | Self::ProjectSubmission(id)
            | Self::LinkSubmission(id)
            | Self::RepresentationSubmission(id)
            | Self::Report(id) => id,
        }
    }
}

impl fmt::Display for ReportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.entity_type(), self.id())
    }
}
