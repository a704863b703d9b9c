// Generative summary modules
//
// The alternative summarization path: a hosted chat-completions model is
// prompted with the three-sentence format rules and its completion is
// validated into the same Summary value the keyword path produces.

pub mod errors;
pub mod generator;
pub mod prompts;
pub mod response;

// Re-export main types
pub use errors::{GenerationError, GenerationResult};
pub use generator::SummaryGenerator;
