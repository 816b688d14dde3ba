//! Field validation shared by every write path.

use crate::enums::{EntityType, VerificationState};
use crate::errors::CoreError;
use crate::ids::MAX_SHORT_TEXT_LEN;

/// Reject short text fields longer than [`MAX_SHORT_TEXT_LEN`] characters.
///
/// `None` and the empty string are accepted.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming the field when it is too long.
pub fn check_short_text(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) if v.chars().count() > MAX_SHORT_TEXT_LEN => Err(CoreError::Validation(format!(
            "{field} exceeds {MAX_SHORT_TEXT_LEN} characters"
        ))),
        _ => Ok(()),
    }
}

/// Check a verification state change against the state machine.
///
/// # Errors
///
/// Returns `CoreError::InvalidTransition` if `from` cannot move to `to`.
pub fn check_transition(
    entity_type: EntityType,
    id: &str,
    from: VerificationState,
    to: VerificationState,
) -> Result<(), CoreError> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_boundary() {
        let max = "x".repeat(MAX_SHORT_TEXT_LEN);
        let over = "x".repeat(MAX_SHORT_TEXT_LEN + 1);
        assert!(check_short_text("name", Some(&max)).is_ok());
        assert!(check_short_text("name", None).is_ok());
        assert!(check_short_text("name", Some("")).is_ok());

        let err = check_short_text("name", Some(&over)).unwrap_err();
        assert!(err.to_string().contains("name exceeds 256"));
    }

    #[test]
    fn short_text_counts_characters_not_bytes() {
        let accented = "é".repeat(MAX_SHORT_TEXT_LEN);
        assert!(check_short_text("tag", Some(&accented)).is_ok());
    }

    #[test]
    fn verification_may_repeat() {
        for from in [VerificationState::Unverified, VerificationState::Verified] {
            assert!(
                check_transition(
                    EntityType::LinkSubmission,
                    "lsb-1",
                    from,
                    VerificationState::Verified
                )
                .is_ok()
            );
        }
    }

    #[test]
    fn verification_cannot_be_withdrawn() {
        let err = check_transition(
            EntityType::ProjectSubmission,
            "psb-1",
            VerificationState::Verified,
            VerificationState::Unverified,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));
    }
}
