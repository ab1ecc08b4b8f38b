mod docx_adapter;
mod pdf_adapter;
mod plain_text_adapter;
mod upload_source;
mod youtube_transcript_adapter;

pub use docx_adapter::DocxAdapter;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use youtube_transcript_adapter::YouTubeTranscriptAdapter;
