use std::sync::Arc;

use crate::application::ports::TextGenerator;
use crate::domain::{PipelineStage, SourceReference, SummaryResult};

use super::format_detector::detect;
use super::prompt_builder::build_prompt;
use super::text_normalizer::normalize;
use super::{ExtractorRegistry, PipelineError, SummarizationGateway};

/// Stages visited by one request and the terminal outcome.
#[derive(Debug)]
pub struct PipelineRun {
    stages: Vec<PipelineStage>,
    outcome: Result<SummaryResult, PipelineError>,
}

impl PipelineRun {
    pub fn stages(&self) -> &[PipelineStage] {
        &self.stages
    }

    pub fn final_stage(&self) -> PipelineStage {
        self.stages.last().copied().unwrap_or(PipelineStage::Idle)
    }

    pub fn outcome(&self) -> &Result<SummaryResult, PipelineError> {
        &self.outcome
    }

    pub fn into_result(self) -> Result<SummaryResult, PipelineError> {
        self.outcome
    }
}

/// Detect, extract, normalize, prompt and summarize, once per request.
pub struct SummarizationPipeline<G>
where
    G: TextGenerator + ?Sized,
{
    extractors: Arc<ExtractorRegistry>,
    gateway: SummarizationGateway<G>,
}

impl<G> SummarizationPipeline<G>
where
    G: TextGenerator + ?Sized,
{
    pub fn new(extractors: Arc<ExtractorRegistry>, generator: Arc<G>) -> Self {
        Self {
            extractors,
            gateway: SummarizationGateway::new(generator),
        }
    }

    pub async fn run(&self, reference: SourceReference) -> Result<SummaryResult, PipelineError> {
        self.run_traced(reference).await.into_result()
    }

    #[tracing::instrument(skip(self, reference), fields(source = %reference.describe()))]
    pub async fn run_traced(&self, reference: SourceReference) -> PipelineRun {
        let mut stages = vec![PipelineStage::Idle];
        let outcome = self.drive(&mut stages, reference).await;

        match &outcome {
            Ok(summary) => {
                enter(&mut stages, PipelineStage::Done);
                tracing::info!(
                    summary_len = summary.text.len(),
                    fallback = summary.is_fallback(),
                    "Summarization pipeline finished"
                );
            }
            Err(e) => {
                enter(&mut stages, PipelineStage::Failed);
                tracing::warn!(error = %e, kind = e.kind(), "Summarization pipeline failed");
            }
        }

        PipelineRun { stages, outcome }
    }

    async fn drive(
        &self,
        stages: &mut Vec<PipelineStage>,
        reference: SourceReference,
    ) -> Result<SummaryResult, PipelineError> {
        enter(stages, PipelineStage::Detecting);
        let kind = match detect(&reference) {
            Ok(kind) => kind,
            Err(e) => {
                release_upload(reference);
                return Err(e);
            }
        };

        enter(stages, PipelineStage::Extracting);
        let extracted = match self.extractors.get(kind) {
            Some(extractor) => extractor
                .extract(&reference)
                .await
                .map_err(PipelineError::from),
            None => Err(PipelineError::UnsupportedSource(format!(
                "no extractor registered for {kind}"
            ))),
        };
        release_upload(reference);
        let units = extracted?;
        tracing::debug!(kind = %kind, units = units.len(), "Extraction complete");

        enter(stages, PipelineStage::Normalizing);
        let text = normalize(&units)?;

        enter(stages, PipelineStage::Prompting);
        let request = build_prompt(text);

        enter(stages, PipelineStage::Summarizing);
        self.gateway.summarize(&request).await
    }
}

fn enter(stages: &mut Vec<PipelineStage>, stage: PipelineStage) {
    debug_assert!(
        stages.last().is_none_or(|current| !current.is_terminal() && *current < stage),
        "pipeline stages only move forward"
    );
    tracing::debug!(stage = %stage, "Entering pipeline stage");
    stages.push(stage);
}

/// Removes the staged upload; called exactly once on every path.
fn release_upload(reference: SourceReference) {
    if let SourceReference::UploadedFile(file) = reference {
        let path = file.path().to_path_buf();
        match file.discard() {
            Ok(()) => tracing::debug!(path = %path.display(), "Removed staged upload"),
            Err(e) => {
                tracing::error!(error = %e, path = %path.display(), "Failed to remove staged upload")
            }
        }
    }
}
