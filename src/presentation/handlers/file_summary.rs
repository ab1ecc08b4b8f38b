use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::TextGenerator;
use crate::domain::SourceReference;
use crate::presentation::state::AppState;

use super::error::pipeline_error_response;
use super::summary_response::SummaryResponse;

const FILE_FIELD: &str = "file";

#[tracing::instrument(skip(state, multipart))]
pub async fn file_summary_handler<G>(
    State(state): State<AppState<G>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    G: TextGenerator + ?Sized + 'static,
{
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.name() == Some(FILE_FIELD) => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("File summary request with no file");
                return (StatusCode::BAD_REQUEST, "No file uploaded").into_response();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                )
                    .into_response();
            }
        }
    };

    let filename = field.file_name().unwrap_or("upload").to_string();

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (StatusCode::BAD_REQUEST, format!("Failed to read file: {}", e))
                .into_response();
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "File data received");

    let upload = match state.upload_staging.stage(&filename, &data).await {
        Ok(upload) => upload,
        Err(e) => {
            tracing::error!(error = %e, "Failed to stage upload");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to store upload").into_response();
        }
    };

    match state.pipeline.run(SourceReference::UploadedFile(upload)).await {
        Ok(summary) => (
            StatusCode::OK,
            Json(SummaryResponse {
                summary: summary.text,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, filename = %filename, "File summary failed");
            pipeline_error_response(&e)
        }
    }
}
