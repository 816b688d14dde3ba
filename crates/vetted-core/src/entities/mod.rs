//! Entity structs for all vetted domain objects.
//!
//! Each entity maps to a table in the libSQL database (see
//! `vetted-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema`.

mod audit;
mod link_submission;
mod project;
mod project_submission;
mod report;
mod representation_submission;

pub use audit::AuditEntry;
pub use link_submission::LinkSubmission;
pub use project::Project;
pub use project_submission::ProjectSubmission;
pub use report::Report;
pub use representation_submission::RepresentationSubmission;
