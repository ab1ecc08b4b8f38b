mod gemini_client;

pub use gemini_client::{DEFAULT_GEMINI_BASE_URL, GeminiClient, extract_candidate_text};
