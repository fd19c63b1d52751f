use std::time::Duration;

use reqwest::{Client, Method, header};
use serde::Deserialize;
use serde_json::json;

use crate::error::{GithubError, Result};
use crate::types::{Comment, IssueState, LinkedIssue, PullRequest, Repo};

const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";
const APP_USER_AGENT: &str = concat!("prguard/", env!("CARGO_PKG_VERSION"));

/// Comment scans read a single page. Reminders land early in a pull
/// request's life, so their markers sit within the first page.
const COMMENTS_PER_PAGE: &str = "100";

const CLOSING_ISSUES_QUERY: &str = "\
query($owner: String!, $name: String!, $number: Int!) {
  repository(owner: $owner, name: $name) {
    pullRequest(number: $number) {
      closingIssuesReferences(first: 50) {
        nodes {
          number
          state
          assignees(first: 30) { nodes { login } }
        }
      }
    }
  }
}";

/// Thin GitHub client covering the handful of endpoints the CI jobs need.
/// Calls are sequential and synchronous relative to each other; no retries.
pub struct GithubClient {
    http: Client,
    token: String,
    repo: Repo,
    api_url: String,
    graphql_url: String,
}

impl GithubClient {
    /// Creates a client against the public GitHub API.
    pub fn new(token: impl Into<String>, repo: Repo) -> Result<Self> {
        Self::with_endpoints(token, repo, DEFAULT_API_URL, DEFAULT_GRAPHQL_URL)
    }

    /// Creates a client against custom endpoints. CI runners set these from
    /// `GITHUB_API_URL`/`GITHUB_GRAPHQL_URL`; tests point them at a mock server.
    pub fn with_endpoints(
        token: impl Into<String>,
        repo: Repo,
        api_url: impl Into<String>,
        graphql_url: impl Into<String>,
    ) -> Result<Self> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            http,
            token: token.into(),
            repo,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            graphql_url: graphql_url.into(),
        })
    }

    #[must_use]
    pub fn repo(&self) -> &Repo {
        &self.repo
    }

    /// Fetches the raw content of a file at a specific revision.
    pub async fn file_at_ref(&self, path: &str, git_ref: &str) -> Result<String> {
        let url = format!("{}/repos/{}/contents/{}", self.api_url, self.repo, path);
        let response = self
            .request(Method::GET, &url, "application/vnd.github.raw+json")
            .query(&[("ref", git_ref)])
            .send()
            .await?;

        Self::check(response, &url).await?.text().await.map_err(Into::into)
    }

    /// Looks up pull request metadata by number.
    pub async fn pull_request(&self, number: u64) -> Result<PullRequest> {
        let url = format!("{}/repos/{}/pulls/{number}", self.api_url, self.repo);
        let response = self
            .request(Method::GET, &url, "application/vnd.github+json")
            .send()
            .await?;

        Self::check(response, &url).await?.json().await.map_err(Into::into)
    }

    /// Lists the comments on a pull request (issue comment collection).
    /// Only the first page is fetched; see `COMMENTS_PER_PAGE`.
    pub async fn issue_comments(&self, number: u64) -> Result<Vec<Comment>> {
        let url = format!(
            "{}/repos/{}/issues/{number}/comments",
            self.api_url, self.repo
        );
        let response = self
            .request(Method::GET, &url, "application/vnd.github+json")
            .query(&[("per_page", COMMENTS_PER_PAGE)])
            .send()
            .await?;

        Self::check(response, &url).await?.json().await.map_err(Into::into)
    }

    /// Posts a new comment on a pull request.
    pub async fn post_comment(&self, number: u64, body: &str) -> Result<Comment> {
        let url = format!(
            "{}/repos/{}/issues/{number}/comments",
            self.api_url, self.repo
        );
        let response = self
            .request(Method::POST, &url, "application/vnd.github+json")
            .json(&json!({ "body": body }))
            .send()
            .await?;

        Self::check(response, &url).await?.json().await.map_err(Into::into)
    }

    /// Fetches the issues this pull request is flagged to close, via the
    /// GraphQL `closingIssuesReferences` connection.
    pub async fn closing_issues(&self, number: u64) -> Result<Vec<LinkedIssue>> {
        let payload = json!({
            "query": CLOSING_ISSUES_QUERY,
            "variables": {
                "owner": self.repo.owner,
                "name": self.repo.name,
                "number": number,
            },
        });

        let response = self
            .request(Method::POST, &self.graphql_url, "application/json")
            .json(&payload)
            .send()
            .await?;

        let body: GraphQlResponse = Self::check(response, &self.graphql_url)
            .await?
            .json()
            .await?;

        if let Some(error) = body.errors.first() {
            return Err(GithubError::GraphQl {
                message: error.message.clone(),
            });
        }

        let nodes = body
            .data
            .and_then(|data| data.repository)
            .and_then(|repo| repo.pull_request)
            .map(|pr| pr.closing_issues.nodes)
            .unwrap_or_default();

        Ok(nodes
            .into_iter()
            .map(|node| LinkedIssue {
                number: node.number,
                state: node.state,
                assignees: node
                    .assignees
                    .nodes
                    .into_iter()
                    .map(|assignee| assignee.login)
                    .collect(),
            })
            .collect())
    }

    fn request(&self, method: Method, url: &str, accept: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.token)
            .header(header::USER_AGENT, APP_USER_AGENT)
            .header(header::ACCEPT, accept)
    }

    async fn check(response: reqwest::Response, endpoint: &str) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(GithubError::Api {
            status: status.as_u16(),
            endpoint: endpoint.to_string(),
            message,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<GraphQlData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlData {
    repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
struct RepositoryNode {
    #[serde(rename = "pullRequest")]
    pull_request: Option<PullRequestNode>,
}

#[derive(Debug, Deserialize)]
struct PullRequestNode {
    #[serde(rename = "closingIssuesReferences")]
    closing_issues: IssueConnection,
}

#[derive(Debug, Deserialize)]
struct IssueConnection {
    nodes: Vec<IssueNode>,
}

#[derive(Debug, Deserialize)]
struct IssueNode {
    number: u64,
    state: IssueState,
    assignees: AssigneeConnection,
}

#[derive(Debug, Deserialize)]
struct AssigneeConnection {
    nodes: Vec<AssigneeNode>,
}

#[derive(Debug, Deserialize)]
struct AssigneeNode {
    login: String,
}
