use super::normalized_text::NormalizedText;

/// Returned in place of an answer when the provider response carries no text.
pub const FALLBACK_SUMMARY: &str = "No response from Gemini";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    normalized_text: NormalizedText,
    instruction_template: &'static str,
}

impl SummaryRequest {
    pub fn new(normalized_text: NormalizedText, instruction_template: &'static str) -> Self {
        Self {
            normalized_text,
            instruction_template,
        }
    }

    pub fn normalized_text(&self) -> &NormalizedText {
        &self.normalized_text
    }

    pub fn instruction_template(&self) -> &'static str {
        self.instruction_template
    }

    /// The full prompt sent to the provider: instructions, then the content.
    pub fn prompt(&self) -> String {
        format!(
            "{}\n\n{}",
            self.instruction_template,
            self.normalized_text.as_str()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    pub text: String,
}

impl SummaryResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_SUMMARY)
    }

    pub fn is_fallback(&self) -> bool {
        self.text == FALLBACK_SUMMARY
    }
}
