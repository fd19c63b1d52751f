//! Issue-link reminder bot: checks a pull request's closing-issue references
//! and author assignment, and posts at most one reminder comment per class,
//! idempotent via marker substrings embedded in the comment bodies.

pub mod error;
pub mod reminder;
pub mod template;

pub use error::{BotError, Result};
pub use reminder::{Options, Outcome, ReminderKind, decide, run};
pub use template::{MISSING_ISSUE_MARKER, UNASSIGNED_ISSUE_MARKER, compose_body};
