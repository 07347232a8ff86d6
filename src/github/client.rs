use std::sync::Arc;

use reqwest::{Client, RequestBuilder, StatusCode, header};
use thiserror::Error;

use crate::config::{Config, RepoConfig};
use crate::models::{TreeItem, TreeResponse};

const API_BASE: &str = "https://api.github.com";
const RAW_BASE: &str = "https://raw.githubusercontent.com";

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status code: {0}")]
    Status(StatusCode),

    #[error("malformed tree payload: {0}")]
    Decode(#[source] reqwest::Error),
}

/// A raw file fetched from the repository, body untouched.
#[derive(Debug, Clone)]
pub struct RawContent {
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Client for the GitHub REST and raw-content endpoints.
///
/// Holds the repository triple and optional token for the lifetime of the
/// process; every request is built from these, nothing is read from the
/// environment at call time. No timeout is set on upstream calls and no
/// retries are attempted.
pub struct GitHubClient {
    http: Client,
    token: Option<String>,
    repo: RepoConfig,
    api_base: String,
    raw_base: String,
}

pub type SharedClient = Arc<GitHubClient>;

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self, GitHubError> {
        Self::with_bases(config, API_BASE, RAW_BASE)
    }

    /// Create a client against alternate base URLs. Tests point this at a
    /// local stub server.
    pub fn with_bases(
        config: &Config,
        api_base: impl Into<String>,
        raw_base: impl Into<String>,
    ) -> Result<Self, GitHubError> {
        // GitHub rejects requests without a User-Agent.
        let http = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            http,
            token: config.github_token.clone(),
            repo: config.repo,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            raw_base: raw_base.into().trim_end_matches('/').to_string(),
        })
    }

    fn tree_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/git/trees/{}?recursive=1",
            self.api_base, self.repo.owner, self.repo.repo, self.repo.branch
        )
    }

    fn raw_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.raw_base, self.repo.owner, self.repo.repo, self.repo.branch, path
        )
    }

    /// Start a GET, attaching the auth header only when a token is set.
    fn get(&self, url: String) -> RequestBuilder {
        let request = self.http.get(url);
        match &self.token {
            Some(token) => request.header(header::AUTHORIZATION, format!("token {token}")),
            None => request,
        }
    }

    /// Fetch the recursive tree listing for the configured branch.
    pub async fn fetch_tree(&self) -> Result<Vec<TreeItem>, GitHubError> {
        let response = self.get(self.tree_url()).send().await?;

        if !response.status().is_success() {
            return Err(GitHubError::Status(response.status()));
        }

        let listing: TreeResponse = response.json().await.map_err(GitHubError::Decode)?;
        Ok(listing.tree)
    }

    /// Fetch one file's raw bytes. `path` may contain slashes and is used
    /// verbatim in the URL.
    pub async fn fetch_raw_content(&self, path: &str) -> Result<RawContent, GitHubError> {
        let response = self.get(self.raw_url(path)).send().await?;

        if !response.status().is_success() {
            return Err(GitHubError::Status(response.status()));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        let body = response.bytes().await?.to_vec();

        Ok(RawContent { content_type, body })
    }
}
