use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::services::PipelineError;

pub fn status_for(err: &PipelineError) -> StatusCode {
    match err {
        PipelineError::UnsupportedSource(_) | PipelineError::EmptyContent => {
            StatusCode::BAD_REQUEST
        }
        PipelineError::TranscriptUnavailable(_)
        | PipelineError::UnreadableDocument(_)
        | PipelineError::ProviderError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Plain-text error response for a failed pipeline run.
pub fn pipeline_error_response(err: &PipelineError) -> Response {
    let message = match err {
        PipelineError::UnsupportedSource(detail) => format!("Unsupported source: {detail}"),
        PipelineError::EmptyContent => "No text found in the provided source.".to_string(),
        PipelineError::TranscriptUnavailable(_) => "Failed to get transcript".to_string(),
        PipelineError::UnreadableDocument(_) => "Failed to process document".to_string(),
        PipelineError::ProviderError(_) => "Failed to get summary from Gemini".to_string(),
    };

    (status_for(err), message).into_response()
}
