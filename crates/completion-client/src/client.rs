//! Completion HTTP client

use crate::error::{CompletionError, Result};
use crate::types::{ApiErrorResponse, CompletionRequest, CompletionResponse};
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Client for a text completion endpoint
pub struct CompletionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CompletionClient {
    /// Create a client against the default endpoint
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom OpenAI-compatible endpoint
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API key with everything but its ends hidden, for logs
    pub fn masked_key(&self) -> String {
        mask_key(&self.api_key)
    }

    /// Request a completion and return the text of the first choice
    pub async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let url = format!("{}/completions", self.base_url);
        debug!(
            url = %url,
            model = %request.model,
            max_tokens = request.max_tokens,
            "Requesting completion"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!(status = %status, message = %message, "Completion request rejected");
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let data: CompletionResponse = response.json().await?;
        let text = data
            .choices
            .into_iter()
            .next()
            .map(|c| c.text)
            .ok_or(CompletionError::EmptyResponse)?;

        debug!(size = text.len(), "Received completion");
        Ok(text)
    }
}

/// Render a secret as its first 3 and last 4 characters
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() < 8 {
        return "***".to_string();
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
