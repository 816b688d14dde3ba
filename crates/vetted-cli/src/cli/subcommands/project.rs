use clap::Subcommand;

/// Project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Create a project, optionally with its first submission.
    Create {
        /// Submitting user.
        #[arg(long)]
        user: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        homepage: Option<String>,
        #[arg(long)]
        tags: Option<String>,
    },
    /// Get a project by ID.
    Get { id: String },
    /// List projects, newest first.
    List,
    /// Show a project's resolved name, homepage, and tags.
    Profile { id: String },
}
