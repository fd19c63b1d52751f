use crate::reminder::ReminderKind;

/// Sentinel substring opening every missing-issue reminder. Invisible in
/// rendered Markdown; scanning comment bodies for it is the only idempotency
/// state the bot keeps.
pub const MISSING_ISSUE_MARKER: &str = "<!-- prguard:missing-linked-issue -->";

/// Sentinel substring opening every unassigned-issue reminder.
pub const UNASSIGNED_ISSUE_MARKER: &str = "<!-- prguard:unassigned-linked-issue -->";

/// Renders the comment body for a reminder. The body always starts with the
/// marker for its kind.
#[must_use]
pub fn compose_body(kind: &ReminderKind, author: &str) -> String {
    match kind {
        ReminderKind::MissingIssue => format!(
            "{MISSING_ISSUE_MARKER}\n\
             👋 Hi @{author}, this pull request does not close any open issue.\n\n\
             Please link the issue this change addresses by adding a closing keyword \
             to the description (for example `Closes #123`), or open one first so the \
             work is tracked. See [linking a pull request to an issue]\
             (https://docs.github.com/en/issues/tracking-your-work-with-issues/linking-a-pull-request-to-an-issue) \
             for the supported keywords.\n"
        ),
        ReminderKind::UnassignedIssue { issues } => {
            let list = issues
                .iter()
                .map(|number| format!("#{number}"))
                .collect::<Vec<_>>()
                .join(", ");
            let plural = if issues.len() == 1 { "issue" } else { "issues" };
            format!(
                "{UNASSIGNED_ISSUE_MARKER}\n\
                 👋 Hi @{author}, you are not assigned to the linked {plural} {list}.\n\n\
                 Please assign yourself before the pull request is reviewed, so it is \
                 clear the work is claimed and nobody picks it up in parallel.\n"
            )
        }
    }
}
