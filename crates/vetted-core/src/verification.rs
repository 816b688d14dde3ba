//! Moderator verification shared by all submission kinds.
//!
//! The verification time and verifier are stored as two nullable columns that
//! are either both set or both null. In Rust they are a single
//! `Option<Verification>`, so the half-set state cannot be represented.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{SubmissionKind, VerificationState};

/// When and by whom a submission was verified.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Verification {
    pub verified_at: DateTime<Utc>,
    pub verified_by: String,
}

impl Verification {
    #[must_use]
    pub fn new(verified_by: impl Into<String>, verified_at: DateTime<Utc>) -> Self {
        Self {
            verified_at,
            verified_by: verified_by.into(),
        }
    }
}

/// Implemented by every submission kind.
pub trait Verifiable {
    const KIND: SubmissionKind;

    fn verification(&self) -> Option<&Verification>;

    fn is_verified(&self) -> bool {
        self.verification().is_some()
    }

    fn verification_state(&self) -> VerificationState {
        if self.is_verified() {
            VerificationState::Verified
        } else {
            VerificationState::Unverified
        }
    }
}
