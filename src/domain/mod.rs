mod extracted_unit;
mod extractor_kind;
mod normalized_text;
mod pipeline_stage;
mod source_reference;
mod summary;
mod uploaded_file;
mod video_id;

pub use extracted_unit::ExtractedUnit;
pub use extractor_kind::ExtractorKind;
pub use normalized_text::NormalizedText;
pub use pipeline_stage::PipelineStage;
pub use source_reference::SourceReference;
pub use summary::{FALLBACK_SUMMARY, SummaryRequest, SummaryResult};
pub use uploaded_file::UploadedFile;
pub use video_id::VideoId;
