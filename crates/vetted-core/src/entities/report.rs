use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::target::ReportTarget;

/// A user-generated abuse report against any stored entity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Report {
    pub id: String,
    pub target: ReportTarget,
    /// `None` for anonymous reports.
    pub user_id: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub resolved: bool,
}

impl Report {
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.user_id.is_none()
    }
}
