use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "prguard")]
#[command(
    author,
    version,
    about = "CI automation for pull requests: changelog validation and issue-link reminders"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate CHANGELOG.md edits between a base and head revision
    #[clap(name = "check-changelog")]
    CheckChangelog {
        /// Base revision (commit SHA or ref) to compare against
        #[clap(long)]
        base: String,

        /// Head revision (commit SHA or ref) carrying the edits
        #[clap(long)]
        head: String,

        /// Path of the changelog document within the repository
        #[clap(long, default_value = "CHANGELOG.md")]
        path: String,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Remind pull request authors about missing or unassigned linked issues
    #[clap(name = "issue-reminder")]
    IssueReminder {
        /// Pull request number (defaults to the number in the trigger payload)
        #[clap(long)]
        pr: Option<u64>,

        /// Compose the reminder comment without posting it
        #[clap(long, default_value_t = false)]
        dry_run: bool,

        /// Do not require the author to be assigned to a linked issue
        #[clap(long, default_value_t = false)]
        skip_assignment_check: bool,
    },
}
