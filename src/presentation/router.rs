use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::TextGenerator;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    file_summary_handler, health_handler, root_handler, transcript_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<G>(state: AppState<G>) -> Router
where
    G: TextGenerator + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin(state.cors_origin.as_deref()))
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/transcript", get(transcript_handler::<G>))
        .route("/file-summary", post(file_summary_handler::<G>))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

fn allowed_origin(origin: Option<&str>) -> AllowOrigin {
    match origin.map(HeaderValue::from_str) {
        Some(Ok(value)) => AllowOrigin::exact(value),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Invalid CORS origin, allowing any origin");
            AllowOrigin::any()
        }
        None => AllowOrigin::any(),
    }
}
