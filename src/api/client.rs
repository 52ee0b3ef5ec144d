use reqwest::{Client, header::CONTENT_TYPE};
use serde_json::json;

use super::queries::USER_SESSION_PROGRESS_QUERY;
use super::types::*;
use crate::config::Config;
use crate::error::{Result, StatsError};

#[derive(Clone)]
pub struct StatsClient {
    client: Client,
    endpoint: String,
}

impl StatsClient {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_endpoint(config.endpoint())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs one lookup: a single POST, no retries.
    pub async fn fetch_stats(&self, username: &str) -> Result<UserStats> {
        let body = json!({
            "query": USER_SESSION_PROGRESS_QUERY,
            "variables": { "username": username }
        });

        tracing::debug!(endpoint = %self.endpoint, username, "sending session progress request");

        let resp = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%status, username, "stats endpoint returned an error status");
            return Err(StatsError::FetchFailed);
        }

        let text = resp.text().await?;
        let data: GraphQLResponse<SessionProgressData> = serde_json::from_str(&text)?;

        let stats = UserStats::from_response(username, data)?;
        tracing::info!(username, solved = stats.bucket(Difficulty::All).solved_count, "fetched user stats");
        Ok(stats)
    }
}
