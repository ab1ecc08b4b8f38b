mod extractor_registry;
mod format_detector;
mod pipeline_error;
mod prompt_builder;
mod summarization_gateway;
mod summarization_pipeline;
mod text_normalizer;

pub use extractor_registry::ExtractorRegistry;
pub use format_detector::detect;
pub use pipeline_error::PipelineError;
pub use prompt_builder::{SUMMARY_INSTRUCTIONS, build_prompt};
pub use summarization_gateway::SummarizationGateway;
pub use summarization_pipeline::{PipelineRun, SummarizationPipeline};
pub use text_normalizer::normalize;
