use crate::domain::{NormalizedText, SummaryRequest};

pub const SUMMARY_INSTRUCTIONS: &str = "Summarize the following content clearly and concisely.
- Use markdown formatting.
- Use **bold** for key concepts, names, or important phrases.
- Use ### headings for major sections and bullet points for lists.
- Keep the structure readable and organized.

Content:";

pub fn build_prompt(text: NormalizedText) -> SummaryRequest {
    SummaryRequest::new(text, SUMMARY_INSTRUCTIONS)
}
