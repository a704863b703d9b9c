// Summary domain module
// Contains the summary value type, keyword ranking, and the keyword summarizer

pub mod keywords;
pub mod summarizer;
pub mod summary;

// Re-export main types for convenience
pub use summarizer::KeywordSummarizer;
pub use summary::Summary;
