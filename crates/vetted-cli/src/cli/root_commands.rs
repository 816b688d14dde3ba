use clap::{Args, Subcommand};

use crate::cli::subcommands::{ProjectCommands, ReportCommands, SubmissionCommands};

/// Root command tree for `vetted`.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the database and apply the schema.
    Init,
    /// Project management.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Project, link, and representation submissions.
    Submission {
        #[command(subcommand)]
        action: SubmissionCommands,
    },
    /// Abuse reports.
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },
    /// Query the moderation audit trail.
    Audit(AuditArgs),
}

/// Arguments for `vetted audit`.
#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    #[arg(long)]
    pub entity_type: Option<String>,
    #[arg(long)]
    pub entity_id: Option<String>,
    #[arg(long)]
    pub action: Option<String>,
    #[arg(long)]
    pub actor: Option<String>,
}
