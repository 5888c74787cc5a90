use anyhow::{bail, Context, Result};
use reqwest::{Client as ReqwestClient, StatusCode};
use shared_types::TextEntry;
use std::time::Duration;
use tracing::debug;

/// Client for the textboard text-submission service
pub struct TextClient {
    client: ReqwestClient,
    base_url: String,
}

impl TextClient {
    /// Create a new client for the service at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Submit a text, returning the server's confirmation message
    pub async fn submit(&self, text: &str) -> Result<String> {
        let url = format!("{}/submit", self.base_url);
        debug!(%url, "submitting text");

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?;

        if response.status() == StatusCode::BAD_REQUEST {
            let body: serde_json::Value = response.json().await?;
            let details = body["details"].as_str().unwrap_or("rejected").to_string();
            bail!("submission rejected: {details}");
        }

        let response = response.error_for_status()?;
        let body: serde_json::Value = response.json().await?;

        Ok(body["message"].as_str().unwrap_or_default().to_string())
    }

    /// All stored texts, most recently submitted first
    pub async fn list(&self) -> Result<Vec<TextEntry>> {
        let url = format!("{}/texts", self.base_url);
        debug!(%url, "listing texts");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let texts: Vec<TextEntry> = response.json().await?;

        Ok(texts)
    }

    /// Whether the service reports itself healthy
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        debug!(%url, "checking health");

        let response = self.client.get(&url).send().await?;

        Ok(response.status() == StatusCode::OK)
    }
}
