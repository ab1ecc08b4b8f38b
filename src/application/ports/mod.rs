mod caption_fetcher;
mod extractor;
mod text_generator;

pub use caption_fetcher::{CaptionFetchError, CaptionFetcher, CaptionLine};
pub use extractor::{ExtractionError, Extractor};
pub use text_generator::{TextGenerator, TextGeneratorError};
