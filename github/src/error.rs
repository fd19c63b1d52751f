use thiserror::Error;

/// Type alias for Result with `GithubError`
pub type Result<T> = std::result::Result<T, GithubError>;

/// Errors from talking to the GitHub API
#[derive(Debug, Error)]
pub enum GithubError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API returned {status} for {endpoint}: {message}")]
    Api {
        status: u16,
        endpoint: String,
        message: String,
    },

    #[error("GraphQL query failed: {message}")]
    GraphQl { message: String },

    #[error("Invalid repository identifier '{0}', expected 'owner/name'")]
    InvalidRepo(String),

    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GithubError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(err) => format!("GitHub request failed: {err}"),
            Self::Api {
                status, endpoint, ..
            } => format!("GitHub API returned {status} for {endpoint}"),
            Self::GraphQl { message } => format!("GitHub GraphQL query failed: {message}"),
            Self::InvalidRepo(repo) => {
                format!("Invalid repository identifier '{repo}', expected 'owner/name'")
            }
            Self::Decode(err) => format!("Failed to decode GitHub response: {err}"),
        }
    }
}
