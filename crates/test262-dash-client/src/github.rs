//! GitHub releases client

use test262_dash_report::Release;

use crate::error::ClientError;

const DEFAULT_API_URL: &str = "https://api.github.com";

// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("test262-dash/", env!("CARGO_PKG_VERSION"));

/// Client for the GitHub releases listing (GET, no auth).
pub struct GithubClient {
    api_url: String,
    client: reqwest::Client,
}

impl GithubClient {
    pub fn new() -> Self {
        Self::with_api_url(DEFAULT_API_URL)
    }

    pub fn with_api_url(url: &str) -> Self {
        Self {
            api_url: url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the releases of `repo` (an `owner/name` pair), newest first.
    pub async fn fetch_releases(&self, repo: &str) -> Result<Vec<Release>, ClientError> {
        let url = self.releases_url(repo);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if response.status() == 404 {
            return Err(ClientError::NotFound(url));
        }

        if !response.status().is_success() {
            return Err(ClientError::Http {
                status: response.status().as_u16(),
                url,
            });
        }

        response.json().await.map_err(|e| ClientError::Parse {
            url,
            message: e.to_string(),
        })
    }

    fn releases_url(&self, repo: &str) -> String {
        format!("{}/repos/{}/releases", self.api_url, repo)
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}
