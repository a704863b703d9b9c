// Infrastructure layer module
// Contains external service adapters (NLP tokenizer, chat-completions client)
// Follows Hexagonal Architecture

pub mod llm;
pub mod tokenizers;
