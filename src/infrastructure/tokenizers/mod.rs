// Tokenizer adapters implementing the domain tokenizer seam

pub mod heuristic_korean;

pub use heuristic_korean::HeuristicKoreanTokenizer;
