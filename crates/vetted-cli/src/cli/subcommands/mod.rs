mod project;
mod report;
mod submission;

pub use project::ProjectCommands;
pub use report::ReportCommands;
pub use submission::{CreateSubmission, SubmissionCommands};
