use std::sync::Arc;

use crate::application::ports::TextGenerator;
use crate::domain::{SummaryRequest, SummaryResult};

use super::PipelineError;

pub struct SummarizationGateway<G>
where
    G: TextGenerator + ?Sized,
{
    generator: Arc<G>,
}

impl<G> SummarizationGateway<G>
where
    G: TextGenerator + ?Sized,
{
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    /// Provider failures propagate; a response without candidate text does not.
    #[tracing::instrument(skip(self, request), fields(text_len = request.normalized_text().len()))]
    pub async fn summarize(
        &self,
        request: &SummaryRequest,
    ) -> Result<SummaryResult, PipelineError> {
        let prompt = request.prompt();
        tracing::debug!(prompt_len = prompt.len(), "Sending summary request");

        let answer = self.generator.generate(&prompt).await.map_err(|e| {
            tracing::error!(error = %e, "Summarization provider failed");
            PipelineError::from(e)
        })?;

        match answer {
            Some(text) if !text.is_empty() => Ok(SummaryResult::new(text)),
            _ => {
                tracing::warn!("Provider response had no candidate text, using fallback");
                Ok(SummaryResult::fallback())
            }
        }
    }
}
