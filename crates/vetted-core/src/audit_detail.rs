//! Typed payloads for the `detail` column of audit entries.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Detail for `AuditAction::Verified`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VerifiedDetail {
    pub verified_by: String,
    pub verified_at: DateTime<Utc>,
    /// Set when this verification overwrote an earlier one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_verified_by: Option<String>,
}

/// Detail for `AuditAction::Reported`, recorded against the reported entity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportedDetail {
    pub report_id: String,
    pub anonymous: bool,
}

/// Detail for `AuditAction::Resolved`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResolvedDetail {
    pub target_type: String,
    pub target_id: String,
    pub already_resolved: bool,
}
