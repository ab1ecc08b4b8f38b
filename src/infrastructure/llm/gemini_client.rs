use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::application::ports::{TextGenerator, TextGeneratorError};
use crate::infrastructure::observability::sanitize_prompt;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, TextGeneratorError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TextGeneratorError::ApiRequestFailed(format!("client setup: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// Text of the first part of the first candidate, if the body has that shape.
pub fn extract_candidate_text(body: &[u8]) -> Option<String> {
    match serde_json::from_slice::<GenerateContentResponse>(body) {
        Ok(response) => response.first_text(),
        Err(e) => {
            tracing::warn!(error = %e, "Unparseable Gemini response body");
            None
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[tracing::instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate(&self, prompt: &str) -> Result<Option<String>, TextGeneratorError> {
        tracing::debug!(prompt = %sanitize_prompt(prompt), "Calling Gemini generateContent");

        let body = serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }]
                }
            ]
        });

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to reach Gemini"))
            .map_err(|e| TextGeneratorError::ApiRequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, "Gemini returned an error status");
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    TextGeneratorError::Unauthorized(message)
                }
                StatusCode::TOO_MANY_REQUESTS => TextGeneratorError::RateLimited,
                _ => TextGeneratorError::ApiRequestFailed(format!("{status}: {message}")),
            });
        }

        let raw = response
            .bytes()
            .await
            .map_err(|e| TextGeneratorError::ApiRequestFailed(e.to_string()))?;

        Ok(extract_candidate_text(&raw))
    }
}
