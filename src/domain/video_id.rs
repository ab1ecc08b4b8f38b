use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static VIDEO_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\?v=|&v=|/embed/|\.be/)([a-zA-Z0-9_-]{11})").unwrap());

/// Eleven character YouTube video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Parses the id out of `watch?v=`, `/embed/` and `youtu.be/` URL forms.
    pub fn from_url(url: &str) -> Option<Self> {
        VIDEO_ID_PATTERN
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| Self(m.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
