mod error;
mod file_summary;
mod health;
mod root;
mod summary_response;
mod transcript;

pub use error::{pipeline_error_response, status_for};
pub use file_summary::file_summary_handler;
pub use health::health_handler;
pub use root::root_handler;
pub use summary_response::SummaryResponse;
pub use transcript::{TranscriptQuery, transcript_handler};
