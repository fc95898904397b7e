//! Report resource client

use serde::de::DeserializeOwned;

use test262_dash_report::{ResultsHistory, SnapshotData};

use crate::error::ClientError;

/// Client for the JSON resources a test262 run publishes.
pub struct ReportClient {
    base_url: String,
    client: reqwest::Client,
}

impl ReportClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Base URL the client resolves resources against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the harness metadata (`info.json`).
    ///
    /// The payload is opaque to the dashboard; it is stored and surfaced
    /// verbatim.
    pub async fn fetch_info(&self) -> Result<serde_json::Value, ClientError> {
        self.get_json(&self.info_url()).await
    }

    /// Fetch the latest complete snapshot for a branch (`latest.json`).
    pub async fn fetch_latest(&self, branch: &str) -> Result<SnapshotData, ClientError> {
        self.get_json(&self.latest_url(branch)).await
    }

    /// Fetch the historical snapshot series for a branch (`results.json`).
    pub async fn fetch_history(&self, branch: &str) -> Result<ResultsHistory, ClientError> {
        self.get_json(&self.history_url(branch)).await
    }

    fn info_url(&self) -> String {
        format!("{}/test262/info.json", self.base_url)
    }

    fn latest_url(&self, branch: &str) -> String {
        format!("{}/test262/refs/heads/{}/latest.json", self.base_url, branch)
    }

    fn history_url(&self, branch: &str) -> String {
        format!("{}/test262/refs/heads/{}/results.json", self.base_url, branch)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if response.status() == 404 {
            return Err(ClientError::NotFound(url.to_string()));
        }

        if !response.status().is_success() {
            return Err(ClientError::Http {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        response.json().await.map_err(|e| ClientError::Parse {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
