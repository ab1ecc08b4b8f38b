use crate::application::ports::{ExtractionError, TextGeneratorError};

/// Every failure a summarization request can end in.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("unsupported source: {0}")]
    UnsupportedSource(String),
    #[error("transcript unavailable: {0}")]
    TranscriptUnavailable(String),
    #[error("unreadable document: {0}")]
    UnreadableDocument(String),
    #[error("no text content could be extracted")]
    EmptyContent,
    #[error("summarization provider error: {0}")]
    ProviderError(String),
}

impl PipelineError {
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::UnsupportedSource(_) => "unsupported_source",
            PipelineError::TranscriptUnavailable(_) => "transcript_unavailable",
            PipelineError::UnreadableDocument(_) => "unreadable_document",
            PipelineError::EmptyContent => "empty_content",
            PipelineError::ProviderError(_) => "provider_error",
        }
    }
}

impl From<ExtractionError> for PipelineError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::UnsupportedSource(msg) => PipelineError::UnsupportedSource(msg),
            ExtractionError::TranscriptUnavailable(msg) => {
                PipelineError::TranscriptUnavailable(msg)
            }
            ExtractionError::UnreadableDocument(msg) => PipelineError::UnreadableDocument(msg),
        }
    }
}

impl From<TextGeneratorError> for PipelineError {
    fn from(err: TextGeneratorError) -> Self {
        PipelineError::ProviderError(err.to_string())
    }
}
