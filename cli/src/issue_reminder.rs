use std::fs;

use bot::{Options, Outcome, ReminderKind};
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::ui;

#[derive(Debug, Clone)]
pub struct IssueReminderArgs {
    pub pr: Option<u64>,
    pub dry_run: bool,
    pub skip_assignment_check: bool,
}

pub fn execute(args: IssueReminderArgs) -> Result<()> {
    let config = Config::from_env()?;

    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {e}")))?;

    rt.block_on(execute_async(args, config))
}

async fn execute_async(args: IssueReminderArgs, config: Config) -> Result<()> {
    let pr_number = resolve_pr_number(args.pr, &config)?;
    let client = config.client()?;

    let options = Options {
        require_assignment: !args.skip_assignment_check,
        dry_run: args.dry_run,
    };

    let outcome = bot::run(&client, pr_number, options).await.map_err(|e| {
        CliError::Bot(e).with_context(format!(
            "Reminder bot failed for {}#{pr_number}",
            config.repository
        ))
    })?;

    match outcome {
        Outcome::SkippedBotAuthor => {
            ui::info_message(&format!(
                "Pull request #{pr_number} was opened by a bot; nothing to do"
            ));
        }
        Outcome::IssuesFetchUnavailable { reason } => {
            ui::warning_message(&format!(
                "Could not fetch linked issues for {}#{pr_number}: {reason}; \
                 not commenting on uncertain data",
                config.repository
            ));
        }
        Outcome::NoActionNeeded => {
            ui::info_message(&format!(
                "Pull request #{pr_number} links its issues properly; no reminder needed"
            ));
        }
        Outcome::AlreadyReminded(kind) => {
            ui::info_message(&format!(
                "A {} reminder is already present on #{pr_number}; not posting again",
                describe(&kind)
            ));
        }
        Outcome::DryRun { body } => {
            ui::info_message("Dry run; would post the following comment:");
            println!("{body}");
        }
        Outcome::Posted { kind, comment_id } => {
            ui::success_message(&format!(
                "Posted {} reminder on #{pr_number} (comment {comment_id})",
                describe(&kind)
            ));
        }
    }

    Ok(())
}

fn describe(kind: &ReminderKind) -> &'static str {
    match kind {
        ReminderKind::MissingIssue => "missing-linked-issue",
        ReminderKind::UnassignedIssue { .. } => "unassigned-issue",
    }
}

/// The pull request number comes from `--pr` when given, otherwise from the
/// trigger event payload. Dispatch-triggered runs carry no payload, so
/// neither source resolving is a fatal configuration error.
fn resolve_pr_number(arg: Option<u64>, config: &Config) -> Result<u64> {
    if let Some(number) = arg {
        return Ok(number);
    }

    let path = config
        .event_path
        .as_ref()
        .ok_or(CliError::PullRequestUnresolved)?;
    let payload: serde_json::Value = serde_json::from_str(&fs::read_to_string(path)?)?;

    payload
        .pointer("/pull_request/number")
        .or_else(|| payload.pointer("/issue/number"))
        .and_then(serde_json::Value::as_u64)
        .ok_or(CliError::PullRequestUnresolved)
}
