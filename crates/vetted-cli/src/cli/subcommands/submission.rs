use clap::Subcommand;

/// Submission commands. `kind` is one of `project`, `link`, `representation`.
#[derive(Clone, Debug, Subcommand)]
pub enum SubmissionCommands {
    /// Submit data about a project.
    Create {
        #[command(subcommand)]
        kind: CreateSubmission,
    },
    /// List a project's submissions of one kind, newest first.
    List {
        kind: String,
        #[arg(long)]
        project: String,
        /// Only verified submissions (representation claims are redacted).
        #[arg(long)]
        verified: bool,
        /// Link tag filter (link submissions only).
        #[arg(long)]
        tag: Option<String>,
    },
    /// Unverified submissions of one kind across all projects, oldest first.
    Pending {
        kind: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Mark a submission verified.
    Verify {
        kind: String,
        id: String,
        #[arg(long)]
        moderator: String,
    },
}

/// Per-kind arguments for `vetted submission create`.
#[derive(Clone, Debug, Subcommand)]
pub enum CreateSubmission {
    /// Propose a name, homepage, or tags.
    Project {
        #[arg(long)]
        project: String,
        #[arg(long)]
        user: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        homepage: Option<String>,
        #[arg(long)]
        tags: Option<String>,
    },
    /// Link a code of conduct, diversity statement, or problematic conduct.
    Link {
        #[arg(long)]
        project: String,
        #[arg(long)]
        user: String,
        /// code_of_conduct, diversity_statement, or problematic_conduct
        #[arg(long)]
        tag: String,
        #[arg(long)]
        url: Option<String>,
        /// Record that the project lacks the tag.
        #[arg(long)]
        absent: bool,
    },
    /// Claim contributor representation.
    Representation {
        #[arg(long)]
        project: String,
        #[arg(long)]
        user: String,
        #[arg(long)]
        tag: String,
        #[arg(long)]
        public_message: Option<String>,
        #[arg(long)]
        private_message: Option<String>,
    },
}
