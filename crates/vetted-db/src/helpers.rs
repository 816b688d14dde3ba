//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate datetime, enum, boolean, and verification
//! decoding.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use vetted_core::enums::{EntityType, SubmissionKind};
use vetted_core::verification::Verification;

use crate::error::DatabaseError;

/// Format a timestamp for storage.
///
/// Fixed microsecond precision with a `Z` suffix keeps every stored value the
/// same width, so text ordering in SQL matches chronological ordering.
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current time truncated to the stored microsecond precision, so an entity
/// returned from a create call equals the same entity read back.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Accepts RFC 3339 and `SQLite`'s `datetime('now')` format
/// (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all vetted-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, so nullable
/// columns go through `Option<String>`. Empty strings are preserved: an empty
/// name is still a set name.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    Ok(row.get::<Option<String>>(idx)?)
}

/// Read an INTEGER 0/1 column as `bool`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_bool(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}

/// Decode the `(verified_at, verified_by)` column pair.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if exactly one of the two columns is
/// set, or `DatabaseError::Query` if the timestamp is malformed.
pub fn get_verification(
    row: &libsql::Row,
    at_idx: i32,
    by_idx: i32,
) -> Result<Option<Verification>, DatabaseError> {
    match (get_opt_string(row, at_idx)?, get_opt_string(row, by_idx)?) {
        (Some(at), Some(by)) => Ok(Some(Verification {
            verified_at: parse_datetime(&at)?,
            verified_by: by,
        })),
        (None, None) => Ok(None),
        (at, by) => Err(DatabaseError::InvalidState(format!(
            "half-set verification: verified_at={at:?} verified_by={by:?}"
        ))),
    }
}

/// Extract an optional JSON value from a TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string contains invalid JSON.
pub fn parse_optional_json(s: Option<&str>) -> Result<Option<serde_json::Value>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => {
            let val = serde_json::from_str(s)
                .map_err(|e| DatabaseError::Query(format!("Invalid JSON in column: {e}")))?;
            Ok(Some(val))
        }
        _ => Ok(None),
    }
}

/// Serialize an audit detail payload.
///
/// # Errors
///
/// Returns `DatabaseError::Other` if serialization fails.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, DatabaseError> {
    serde_json::to_value(value).map_err(|e| DatabaseError::Other(e.into()))
}

/// Map `EntityType` to the corresponding SQL table name.
///
/// Exhaustive match: adding a new `EntityType` variant forces updating this.
#[must_use]
pub const fn entity_type_to_table(entity: EntityType) -> &'static str {
    match entity {
        EntityType::Project => "projects",
        EntityType::ProjectSubmission => "project_submissions",
        EntityType::LinkSubmission => "link_submissions",
        EntityType::RepresentationSubmission => "representation_submissions",
        EntityType::Report => "reports",
    }
}

/// Map a submission kind to its SQL table name.
#[must_use]
pub const fn submission_table(kind: SubmissionKind) -> &'static str {
    entity_type_to_table(kind.entity_type())
}
