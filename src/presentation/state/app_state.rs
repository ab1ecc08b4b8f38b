use std::sync::Arc;

use crate::application::ports::TextGenerator;
use crate::application::services::SummarizationPipeline;
use crate::infrastructure::storage::UploadStaging;

pub struct AppState<G>
where
    G: TextGenerator + ?Sized,
{
    pub pipeline: Arc<SummarizationPipeline<G>>,
    pub upload_staging: Arc<UploadStaging>,
    pub cors_origin: Option<String>,
    pub max_upload_bytes: usize,
}

impl<G> Clone for AppState<G>
where
    G: TextGenerator + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            upload_staging: Arc::clone(&self.upload_staging),
            cors_origin: self.cors_origin.clone(),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
