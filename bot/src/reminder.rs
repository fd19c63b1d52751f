use github::{GithubClient, LinkedIssue};

use crate::error::Result;
use crate::template::{MISSING_ISSUE_MARKER, UNASSIGNED_ISSUE_MARKER, compose_body};

/// The two reminder classes the bot can owe a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderKind {
    /// The pull request closes no open issue.
    MissingIssue,
    /// Open issues are linked but the author is assigned to none of them.
    UnassignedIssue { issues: Vec<u64> },
}

impl ReminderKind {
    #[must_use]
    pub fn marker(&self) -> &'static str {
        match self {
            Self::MissingIssue => MISSING_ISSUE_MARKER,
            Self::UnassignedIssue { .. } => UNASSIGNED_ISSUE_MARKER,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// When false, any open linked issue satisfies the check regardless of
    /// assignment.
    pub require_assignment: bool,
    /// Compose the comment but perform no write.
    pub dry_run: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            require_assignment: true,
            dry_run: false,
        }
    }
}

/// What a single bot run did, for the caller to log. Every variant maps to a
/// zero exit status; genuine failures surface as errors instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    SkippedBotAuthor,
    /// The linked-issues query failed; commenting on uncertain data is worse
    /// than staying silent, so the run degrades to a no-op.
    IssuesFetchUnavailable { reason: String },
    NoActionNeeded,
    AlreadyReminded(ReminderKind),
    DryRun { body: String },
    Posted { kind: ReminderKind, comment_id: u64 },
}

/// Decides which reminder, if any, a pull request is owed. Pure function of
/// the author login and the open linked issues.
#[must_use]
pub fn decide(
    author: &str,
    open_issues: &[LinkedIssue],
    require_assignment: bool,
) -> Option<ReminderKind> {
    if open_issues.is_empty() {
        return Some(ReminderKind::MissingIssue);
    }

    let author_assigned = open_issues
        .iter()
        .any(|issue| issue.assignees.iter().any(|login| login == author));

    if require_assignment && !author_assigned {
        return Some(ReminderKind::UnassignedIssue {
            issues: open_issues.iter().map(|issue| issue.number).collect(),
        });
    }

    None
}

/// Runs the reminder workflow for one pull request, posting at most one
/// comment. Idempotency is derived from the existing comment bodies: a
/// comment carrying the owed reminder's marker means the reminder was
/// already delivered.
pub async fn run(client: &GithubClient, pr_number: u64, options: Options) -> Result<Outcome> {
    let pr = client.pull_request(pr_number).await?;
    if pr.author_is_bot() {
        return Ok(Outcome::SkippedBotAuthor);
    }

    let issues = match client.closing_issues(pr_number).await {
        Ok(issues) => issues,
        Err(err) => {
            return Ok(Outcome::IssuesFetchUnavailable {
                reason: err.user_message(),
            });
        }
    };

    let open_issues: Vec<LinkedIssue> = issues.into_iter().filter(|i| i.is_open()).collect();
    let Some(kind) = decide(&pr.user.login, &open_issues, options.require_assignment) else {
        return Ok(Outcome::NoActionNeeded);
    };

    let comments = client.issue_comments(pr_number).await?;
    if comments.iter().any(|c| c.body.contains(kind.marker())) {
        return Ok(Outcome::AlreadyReminded(kind));
    }

    let body = compose_body(&kind, &pr.user.login);
    if options.dry_run {
        return Ok(Outcome::DryRun { body });
    }

    let comment = client.post_comment(pr_number, &body).await?;
    Ok(Outcome::Posted {
        kind,
        comment_id: comment.id,
    })
}
