/// One atomic piece of extracted content, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedUnit(String);

impl ExtractedUnit {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for ExtractedUnit {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for ExtractedUnit {
    fn from(text: String) -> Self {
        Self(text)
    }
}
