/// Noun extraction seam
///
/// The summarizer only needs one capability from an NLP engine: turning free
/// text into a sequence of noun substrings. Implementations live in the
/// infrastructure layer; tests inject a deterministic stub.
pub trait Tokenizer: Send + Sync {
    /// Extract noun tokens from the text, in source order
    fn nouns(&self, text: &str) -> Vec<String>;
}
