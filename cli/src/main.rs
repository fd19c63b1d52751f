mod check_changelog;
mod cli;
mod config;
mod error;
mod issue_reminder;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::CheckChangelog {
            base,
            head,
            path,
            verbose,
        } => check_changelog::execute(check_changelog::CheckChangelogArgs {
            base,
            head,
            path,
            verbose,
        }),
        Commands::IssueReminder {
            pr,
            dry_run,
            skip_assignment_check,
        } => issue_reminder::execute(issue_reminder::IssueReminderArgs {
            pr,
            dry_run,
            skip_assignment_check,
        }),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
