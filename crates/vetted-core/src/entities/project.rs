use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A community project. Its descriptive fields are never stored here; see
/// `ProjectProfile` for the derived view.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    /// Creator.
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}
