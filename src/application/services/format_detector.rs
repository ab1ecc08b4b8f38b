use crate::domain::{ExtractorKind, SourceReference, VideoId};

use super::PipelineError;

/// Picks the extractor for a source from its URL shape or file extension.
pub fn detect(reference: &SourceReference) -> Result<ExtractorKind, PipelineError> {
    match reference {
        SourceReference::YouTubeUrl(url) => VideoId::from_url(url)
            .map(|_| ExtractorKind::YouTubeTranscript)
            .ok_or_else(|| {
                PipelineError::UnsupportedSource(format!("not a YouTube video URL: {url}"))
            }),
        SourceReference::UploadedFile(file) => file
            .declared_extension()
            .and_then(ExtractorKind::from_extension)
            .ok_or_else(|| {
                PipelineError::UnsupportedSource(format!(
                    "unsupported file type: {}",
                    file.original_name()
                ))
            }),
    }
}
