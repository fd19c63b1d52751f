use thiserror::Error;

/// Type alias for Result with `BotError`
pub type Result<T> = std::result::Result<T, BotError>;

/// Errors from the reminder bot workflow
#[derive(Debug, Error)]
pub enum BotError {
    #[error("GitHub error: {0}")]
    Github(#[from] github::GithubError),
}

impl BotError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Github(err) => err.user_message(),
        }
    }
}
