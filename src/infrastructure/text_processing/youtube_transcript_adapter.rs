use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{CaptionFetcher, ExtractionError, Extractor};
use crate::domain::{ExtractedUnit, ExtractorKind, SourceReference, VideoId};

/// One unit per caption line, ordered by start time.
pub struct YouTubeTranscriptAdapter {
    fetcher: Arc<dyn CaptionFetcher>,
}

impl YouTubeTranscriptAdapter {
    pub fn new(fetcher: Arc<dyn CaptionFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl Extractor for YouTubeTranscriptAdapter {
    fn kind(&self) -> ExtractorKind {
        ExtractorKind::YouTubeTranscript
    }

    #[tracing::instrument(skip(self, reference))]
    async fn extract(
        &self,
        reference: &SourceReference,
    ) -> Result<Vec<ExtractedUnit>, ExtractionError> {
        let SourceReference::YouTubeUrl(url) = reference else {
            return Err(ExtractionError::UnsupportedSource(format!(
                "transcript extractor expects a YouTube URL, got {}",
                reference.describe()
            )));
        };

        let video_id = VideoId::from_url(url).ok_or_else(|| {
            ExtractionError::UnsupportedSource(format!("not a YouTube video URL: {url}"))
        })?;

        let mut lines = self.fetcher.fetch_captions(&video_id).await.map_err(|e| {
            tracing::warn!(video_id = %video_id, error = %e, "Caption fetch failed");
            ExtractionError::TranscriptUnavailable(e.to_string())
        })?;

        if lines.is_empty() {
            return Err(ExtractionError::TranscriptUnavailable(format!(
                "video {video_id} has an empty caption track"
            )));
        }

        lines.sort_by(|a, b| a.start_secs.total_cmp(&b.start_secs));
        tracing::info!(video_id = %video_id, lines = lines.len(), "Transcript fetched");

        Ok(lines
            .into_iter()
            .map(|line| ExtractedUnit::new(line.text))
            .collect())
    }
}
