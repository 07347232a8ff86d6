//! Server configuration.
//!
//! Built once at startup from the environment and passed into the GitHub
//! client; nothing reads ambient state after that. The repository triple is
//! compiled in - changing it means rebuilding.

/// The GitHub repository this server fronts.
#[derive(Debug, Clone, Copy)]
pub struct RepoConfig {
    pub owner: &'static str,
    pub repo: &'static str,
    pub branch: &'static str,
}

pub const REPO: RepoConfig = RepoConfig {
    owner: "drbestie",
    repo: "KnockMock",
    branch: "master",
};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Optional token for private repositories and higher rate limits.
    pub github_token: Option<String>,
    pub repo: RepoConfig,
}

impl Config {
    /// Read `PORT` and `GITHUB_TOKEN` from the environment.
    ///
    /// A missing or unparseable `PORT` falls back to 3000. An empty token is
    /// treated as unset so that `GITHUB_TOKEN=` in a deploy environment does
    /// not send an empty Authorization header upstream.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let github_token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());

        Self {
            port,
            github_token,
            repo: REPO,
        }
    }
}
