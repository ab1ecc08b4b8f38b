use async_trait::async_trait;

/// External generative-text provider.
///
/// `Ok(None)` means the provider answered but the response held no
/// extractable candidate text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, TextGeneratorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextGeneratorError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("rate limited")]
    RateLimited,
}
