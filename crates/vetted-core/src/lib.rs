//! # vetted-core
//!
//! Core types for the vetted project submission and moderation store.
//!
//! This crate provides the foundational types shared across all vetted crates:
//! - Entity structs for projects, the three submission kinds, reports and audit entries
//! - Enums for entity types, link tags, submission kinds and the verification state machine
//! - The closed `ReportTarget` union used for polymorphic report references
//! - ID prefix constants
//! - Read-time projection of a project's display fields (`ProjectProfile`)
//! - Field validation and cross-cutting error types

pub mod audit_detail;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod profile;
pub mod target;
pub mod validation;
pub mod verification;
