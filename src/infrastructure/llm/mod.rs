// Chat-completions adapter implementing the summary generator seam

pub mod chat_completions;

pub use chat_completions::{ChatCompletionsGenerator, GenerationConfig};
