use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::GithubError;

/// Repository coordinates in `owner/name` form (the `GITHUB_REPOSITORY` shape).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    pub owner: String,
    pub name: String,
}

impl FromStr for Repo {
    type Err = GithubError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(GithubError::InvalidRepo(s.to_string())),
        }
    }
}

impl Display for Repo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Account that authored a pull request or comment.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub login: String,
    /// GitHub account type: "User", "Bot" or "Organization".
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub user: Account,
}

impl PullRequest {
    /// Automated-account detection: the account type flag, or the `[bot]`
    /// login suffix convention for integrations that report as plain users.
    #[must_use]
    pub fn author_is_bot(&self) -> bool {
        self.user.kind.eq_ignore_ascii_case("bot") || self.user.login.ends_with("[bot]")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IssueState {
    Open,
    Closed,
}

/// An issue the pull request is flagged to close, with its assignee logins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedIssue {
    pub number: u64,
    pub state: IssueState,
    pub assignees: Vec<String>,
}

impl LinkedIssue {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == IssueState::Open
    }
}
