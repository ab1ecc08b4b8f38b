use async_trait::async_trait;

use crate::domain::VideoId;

#[derive(Debug, Clone, PartialEq)]
pub struct CaptionLine {
    pub text: String,
    pub start_secs: f64,
}

impl CaptionLine {
    pub fn new(text: impl Into<String>, start_secs: f64) -> Self {
        Self {
            text: text.into(),
            start_secs,
        }
    }
}

#[async_trait]
pub trait CaptionFetcher: Send + Sync {
    async fn fetch_captions(
        &self,
        video_id: &VideoId,
    ) -> Result<Vec<CaptionLine>, CaptionFetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CaptionFetchError {
    #[error("video {0} has no caption tracks")]
    NoCaptions(String),
    #[error("caption request failed: {0}")]
    RequestFailed(String),
    #[error("invalid caption data: {0}")]
    InvalidResponse(String),
}
