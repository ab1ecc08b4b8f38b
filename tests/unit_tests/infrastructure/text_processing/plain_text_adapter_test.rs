use recap::application::ports::{ExtractionError, Extractor};
use recap::domain::SourceReference;
use recap::infrastructure::text_processing::PlainTextAdapter;

use crate::common::{create_staging, stage};

#[tokio::test]
async fn given_utf8_file_when_extracting_then_returns_whole_content() {
    let (_dir, staging) = create_staging();
    let (upload, _) = stage(&staging, "notes.txt", "Line one\nLínea dos\n".as_bytes()).await;

    let units = PlainTextAdapter
        .extract(&SourceReference::UploadedFile(upload))
        .await
        .unwrap();

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].as_str(), "Line one\nLínea dos\n");
}

#[tokio::test]
async fn given_invalid_utf8_when_extracting_then_unreadable_document() {
    let (_dir, staging) = create_staging();
    let (upload, _) = stage(&staging, "binary.txt", &[0xff, 0xfe, 0x00, 0xc3]).await;

    let result = PlainTextAdapter
        .extract(&SourceReference::UploadedFile(upload))
        .await;

    assert!(matches!(result, Err(ExtractionError::UnreadableDocument(_))));
}

#[tokio::test]
async fn given_youtube_reference_when_extracting_then_unsupported_source() {
    let reference = SourceReference::YouTubeUrl("https://youtu.be/dQw4w9WgXcQ".to_string());

    let result = PlainTextAdapter.extract(&reference).await;

    assert!(matches!(result, Err(ExtractionError::UnsupportedSource(_))));
}
