use std::fmt;

/// Selects the extraction strategy for a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractorKind {
    YouTubeTranscript,
    Pdf,
    Docx,
    PlainText,
}

impl ExtractorKind {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            ".pdf" => Some(Self::Pdf),
            ".docx" => Some(Self::Docx),
            ".txt" => Some(Self::PlainText),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::YouTubeTranscript => "youtube_transcript",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::PlainText => "plain_text",
        }
    }
}

impl fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
