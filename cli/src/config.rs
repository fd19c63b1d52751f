use std::env;
use std::path::PathBuf;

use github::{GithubClient, Repo};

use crate::error::{CliError, Result};

const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Environment-derived configuration, gathered once at startup so components
/// receive an explicit object instead of reading ambient process state.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub repository: Repo,
    /// Login that triggered the workflow (`GITHUB_ACTOR`).
    pub actor: Option<String>,
    /// Path to the trigger event payload (`GITHUB_EVENT_PATH`); absent for
    /// dispatch-triggered runs.
    pub event_path: Option<PathBuf>,
    pub api_url: String,
    pub graphql_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = require("GITHUB_TOKEN")?;
        let repository = require("GITHUB_REPOSITORY")?.parse::<Repo>()?;

        Ok(Self {
            token,
            repository,
            actor: env::var("GITHUB_ACTOR").ok(),
            event_path: env::var("GITHUB_EVENT_PATH").ok().map(PathBuf::from),
            api_url: env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            graphql_url: env::var("GITHUB_GRAPHQL_URL")
                .unwrap_or_else(|_| DEFAULT_GRAPHQL_URL.to_string()),
        })
    }

    pub fn client(&self) -> Result<GithubClient> {
        GithubClient::with_endpoints(
            self.token.as_str(),
            self.repository.clone(),
            self.api_url.as_str(),
            self.graphql_url.as_str(),
        )
        .map_err(Into::into)
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).map_err(|_| CliError::MissingEnv(name.to_string()))
}
