use crate::domain::{ExtractedUnit, NormalizedText};

use super::PipelineError;

/// Joins units with newlines in order and trims the result.
pub fn normalize(units: &[ExtractedUnit]) -> Result<NormalizedText, PipelineError> {
    let joined = units
        .iter()
        .map(ExtractedUnit::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    NormalizedText::new(&joined).ok_or(PipelineError::EmptyContent)
}
