//! Repository modules implementing storage operations for all vetted entities.
//!
//! Each module adds methods to `VettedService` via `impl VettedService` blocks.

pub mod audit;
pub mod link_submission;
pub mod project;
pub mod project_submission;
pub mod report;
pub mod representation_submission;
pub mod verification;
