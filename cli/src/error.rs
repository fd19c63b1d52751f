use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GitHub error: {0}")]
    Github(#[from] github::GithubError),

    #[error("Reminder bot error: {0}")]
    Bot(#[from] bot::BotError),

    #[error("Failed to parse event payload: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),

    #[error("Could not determine the pull request number")]
    PullRequestUnresolved,

    #[error("Changelog validation failed with {0} problem(s)")]
    ValidationFailed(usize),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Github(err) => err.user_message(),
            Self::Bot(err) => err.user_message(),
            Self::JsonParseError(err) => format!("Failed to parse event payload: {err}"),
            Self::MissingEnv(name) => format!("Missing required environment variable: {name}"),
            Self::PullRequestUnresolved => {
                "Could not determine the pull request number; pass --pr or run from a pull_request event".to_string()
            }
            Self::ValidationFailed(count) => {
                format!("Changelog validation failed with {count} problem(s)")
            }
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
