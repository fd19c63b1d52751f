//! Minimal GitHub client for the CI automation jobs: raw file content at a
//! revision, pull request metadata, issue comments, and the GraphQL
//! closing-issues connection.

pub mod client;
pub mod error;
pub mod types;

pub use client::GithubClient;
pub use error::{GithubError, Result};
pub use types::{Account, Comment, IssueState, LinkedIssue, PullRequest, Repo};
