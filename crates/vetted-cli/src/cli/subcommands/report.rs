use clap::Subcommand;

/// Report commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReportCommands {
    /// Report any stored entity.
    Create {
        /// project, project_submission, link_submission,
        /// representation_submission, or report
        #[arg(long)]
        target_type: String,
        #[arg(long)]
        target_id: String,
        /// Reporting user; omit for an anonymous report.
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        message: Option<String>,
    },
    /// List reports, newest first.
    List {
        /// Only unresolved reports.
        #[arg(long, conflicts_with = "resolved")]
        open: bool,
        /// Only resolved reports.
        #[arg(long)]
        resolved: bool,
        #[arg(long)]
        target_type: Option<String>,
        /// Reports against one entity (requires --target-type).
        #[arg(long, requires = "target_type")]
        target_id: Option<String>,
        #[arg(long)]
        user: Option<String>,
    },
    /// Mark a report resolved.
    Resolve {
        id: String,
        #[arg(long)]
        moderator: String,
    },
}
