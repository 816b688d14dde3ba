use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{LinkTag, SubmissionKind};
use crate::verification::{Verifiable, Verification};

/// Evidence that a project does (or does not) carry a categorical tag.
///
/// A submission with `project_has_tag == false` and no `url` records that the
/// project lacks the tag, e.g. "no code of conduct".
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LinkSubmission {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub tag: LinkTag,
    pub url: Option<String>,
    pub project_has_tag: bool,
    pub created_at: DateTime<Utc>,
    pub verification: Option<Verification>,
}

impl Verifiable for LinkSubmission {
    const KIND: SubmissionKind = SubmissionKind::Link;

    fn verification(&self) -> Option<&Verification> {
        self.verification.as_ref()
    }
}
