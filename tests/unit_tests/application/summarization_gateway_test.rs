use std::sync::Arc;

use recap::application::services::{PipelineError, SummarizationGateway, build_prompt};
use recap::domain::{FALLBACK_SUMMARY, NormalizedText};

use crate::common::{GeneratorReply, MockTextGenerator};

fn request() -> recap::domain::SummaryRequest {
    build_prompt(NormalizedText::new("lecture transcript").unwrap())
}

#[tokio::test]
async fn given_candidate_text_when_summarizing_then_returns_it_verbatim() {
    let generator = Arc::new(MockTextGenerator::answering("### Topic\n- **point**"));
    let gateway = SummarizationGateway::new(Arc::clone(&generator));

    let result = gateway.summarize(&request()).await.unwrap();

    assert_eq!(result.text, "### Topic\n- **point**");
    assert!(!result.is_fallback());
    assert_eq!(generator.last_prompt(), Some(request().prompt()));
}

#[tokio::test]
async fn given_no_candidate_when_summarizing_then_returns_fallback() {
    let generator = Arc::new(MockTextGenerator::new(GeneratorReply::Empty));
    let gateway = SummarizationGateway::new(generator);

    let result = gateway.summarize(&request()).await.unwrap();

    assert_eq!(result.text, FALLBACK_SUMMARY);
    assert!(result.is_fallback());
}

#[tokio::test]
async fn given_empty_candidate_when_summarizing_then_returns_fallback() {
    let gateway = SummarizationGateway::new(Arc::new(MockTextGenerator::answering("")));

    let result = gateway.summarize(&request()).await.unwrap();

    assert!(result.is_fallback());
}

#[tokio::test]
async fn given_provider_failure_when_summarizing_then_reports_provider_error() {
    let generator = Arc::new(MockTextGenerator::new(GeneratorReply::Fail));
    let gateway = SummarizationGateway::new(Arc::clone(&generator));

    let result = gateway.summarize(&request()).await;

    assert!(matches!(result, Err(PipelineError::ProviderError(_))));
    assert_eq!(generator.calls(), 1);
}
