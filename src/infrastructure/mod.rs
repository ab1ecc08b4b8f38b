pub mod llm;
pub mod observability;
pub mod storage;
pub mod text_processing;
pub mod youtube;
