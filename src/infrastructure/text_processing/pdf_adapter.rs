use std::path::{Path, PathBuf};

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{ExtractionError, Extractor};
use crate::domain::{ExtractedUnit, ExtractorKind, SourceReference};

use super::upload_source::uploaded_file;

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// One unit per page, pages in ascending order, text runs joined by single spaces.
    fn extract_pages(path: &Path) -> Result<Vec<ExtractedUnit>, ExtractionError> {
        let doc = PdfDocument::open(path).map_err(|e| {
            ExtractionError::UnreadableDocument(format!("failed to parse PDF: {e}"))
        })?;

        let page_count = doc.page_count().map_err(|e| {
            ExtractionError::UnreadableDocument(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            let text = doc.extract_text(page_index).map_err(|e| {
                ExtractionError::UnreadableDocument(format!(
                    "failed to read page {}: {e}",
                    page_index + 1
                ))
            })?;

            pages.push(ExtractedUnit::new(join_text_runs(&text)));
        }

        Ok(pages)
    }
}

fn join_text_runs(page_text: &str) -> String {
    page_text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[async_trait]
impl Extractor for PdfAdapter {
    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Pdf
    }

    #[tracing::instrument(skip(self, reference), fields(source = %reference.describe()))]
    async fn extract(
        &self,
        reference: &SourceReference,
    ) -> Result<Vec<ExtractedUnit>, ExtractionError> {
        let file = uploaded_file(reference, ExtractorKind::Pdf)?;
        let path: PathBuf = file.path().to_path_buf();

        let pages = tokio::task::spawn_blocking(move || Self::extract_pages(&path))
            .await
            .map_err(|e| ExtractionError::UnreadableDocument(format!("task join error: {e}")))??;

        let text_pages = pages.iter().filter(|p| !p.as_str().is_empty()).count();
        tracing::info!(
            page_count = pages.len(),
            text_pages,
            "PDF text extraction complete"
        );

        Ok(pages)
    }
}
