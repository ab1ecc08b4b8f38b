use async_trait::async_trait;

use crate::application::ports::{ExtractionError, Extractor};
use crate::domain::{ExtractedUnit, ExtractorKind, SourceReference};

use super::upload_source::uploaded_file;

pub struct PlainTextAdapter;

#[async_trait]
impl Extractor for PlainTextAdapter {
    fn kind(&self) -> ExtractorKind {
        ExtractorKind::PlainText
    }

    async fn extract(
        &self,
        reference: &SourceReference,
    ) -> Result<Vec<ExtractedUnit>, ExtractionError> {
        let file = uploaded_file(reference, ExtractorKind::PlainText)?;

        let text = tokio::fs::read_to_string(file.path())
            .await
            .map_err(|e| ExtractionError::UnreadableDocument(e.to_string()))?;

        Ok(vec![ExtractedUnit::new(text)])
    }
}
