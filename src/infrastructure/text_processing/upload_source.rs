use crate::application::ports::ExtractionError;
use crate::domain::{ExtractorKind, SourceReference, UploadedFile};

/// Borrows the staged upload, refusing references meant for another extractor.
pub(super) fn uploaded_file(
    reference: &SourceReference,
    kind: ExtractorKind,
) -> Result<&UploadedFile, ExtractionError> {
    let SourceReference::UploadedFile(file) = reference else {
        return Err(ExtractionError::UnsupportedSource(format!(
            "{kind} extractor expects an uploaded file, got {}",
            reference.describe()
        )));
    };

    match file.declared_extension().and_then(ExtractorKind::from_extension) {
        Some(declared) if declared == kind => Ok(file),
        _ => Err(ExtractionError::UnsupportedSource(format!(
            "{kind} extractor cannot read {}",
            file.original_name()
        ))),
    }
}
