use async_trait::async_trait;

use crate::domain::{ExtractedUnit, ExtractorKind, SourceReference};

/// Turns one kind of source into an ordered sequence of text units.
#[async_trait]
pub trait Extractor: Send + Sync {
    fn kind(&self) -> ExtractorKind;

    async fn extract(
        &self,
        reference: &SourceReference,
    ) -> Result<Vec<ExtractedUnit>, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported source: {0}")]
    UnsupportedSource(String),
    #[error("transcript unavailable: {0}")]
    TranscriptUnavailable(String),
    #[error("unreadable document: {0}")]
    UnreadableDocument(String),
}
