use std::sync::Arc;

use tokio::net::TcpListener;

use recap::application::ports::{CaptionFetcher, Extractor};
use recap::application::services::{ExtractorRegistry, SummarizationPipeline};
use recap::infrastructure::llm::GeminiClient;
use recap::infrastructure::observability::{TracingConfig, init_tracing};
use recap::infrastructure::storage::UploadStaging;
use recap::infrastructure::text_processing::{
    DocxAdapter, PdfAdapter, PlainTextAdapter, YouTubeTranscriptAdapter,
};
use recap::infrastructure::youtube::YouTubeCaptionFetcher;
use recap::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig {
        environment: environment.to_string(),
        json_format: settings.logging.enable_json,
        default_filter: settings.logging.level.clone(),
    })?;

    if settings.gemini.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set, summarization requests will be rejected");
    }

    let generator = Arc::new(GeminiClient::new(
        &settings.gemini.base_url,
        &settings.gemini.api_key,
        &settings.gemini.model,
        settings.gemini.timeout(),
    )?);

    let caption_fetcher: Arc<dyn CaptionFetcher> = Arc::new(YouTubeCaptionFetcher::new(
        &settings.youtube.base_url,
        &settings.youtube.caption_language,
    ));

    let extractors: Vec<Arc<dyn Extractor>> = vec![
        Arc::new(YouTubeTranscriptAdapter::new(caption_fetcher)),
        Arc::new(PdfAdapter::new()),
        Arc::new(DocxAdapter::new()),
        Arc::new(PlainTextAdapter),
    ];
    let registry = Arc::new(ExtractorRegistry::new(extractors));

    let pipeline = Arc::new(SummarizationPipeline::new(registry, generator));

    let upload_staging = UploadStaging::new(&settings.upload.dir)?;
    let leftovers = upload_staging.purge_leftovers()?;
    if leftovers > 0 {
        tracing::warn!(leftovers, dir = %upload_staging.dir().display(), "Removed stale uploads");
    }

    let state = AppState {
        pipeline,
        upload_staging: Arc::new(upload_staging),
        cors_origin: settings.server.cors_origin.clone(),
        max_upload_bytes: settings.upload.max_file_size_bytes(),
    };

    let router = create_router(state);

    let listener = TcpListener::bind((settings.server.host.as_str(), settings.server.port)).await?;
    tracing::info!(
        host = %settings.server.host,
        port = settings.server.port,
        model = %settings.gemini.model,
        "Server running"
    );

    axum::serve(listener, router).await?;

    Ok(())
}
