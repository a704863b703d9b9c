use async_trait::async_trait;

use super::errors::GenerationResult;
use crate::domain::summary::Summary;

/// Seam for the hosted generative summarization path
///
/// Defines the contract the API layer depends on. The production
/// implementation calls a chat-completions endpoint; tests use a scripted
/// stand-in.
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    /// Generate a three-sentence summary from the two passages
    async fn generate(&self, strengths: &str, weaknesses: &str) -> GenerationResult<Summary>;
}
