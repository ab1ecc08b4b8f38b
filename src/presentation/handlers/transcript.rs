use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::ports::TextGenerator;
use crate::domain::SourceReference;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::pipeline_error_response;
use super::summary_response::SummaryResponse;

#[derive(Debug, Deserialize)]
pub struct TranscriptQuery {
    pub url: Option<String>,
}

#[tracing::instrument(skip(state, query))]
pub async fn transcript_handler<G>(
    State(state): State<AppState<G>>,
    Query(query): Query<TranscriptQuery>,
) -> impl IntoResponse
where
    G: TextGenerator + ?Sized + 'static,
{
    let Some(url) = query.url.filter(|u| !u.trim().is_empty()) else {
        tracing::warn!("Transcript request without url");
        return (StatusCode::BAD_REQUEST, "Missing URL").into_response();
    };

    tracing::debug!(url = %sanitize_prompt(&url), "Processing transcript summary");

    match state
        .pipeline
        .run(SourceReference::YouTubeUrl(url.trim().to_string()))
        .await
    {
        Ok(summary) => (
            StatusCode::OK,
            Json(SummaryResponse {
                summary: summary.text,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Transcript summary failed");
            pipeline_error_response(&e)
        }
    }
}
