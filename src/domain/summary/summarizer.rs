use std::sync::Arc;

use super::keywords::top_keywords;
use super::summary::Summary;
use crate::domain::tokenizer::Tokenizer;

/// Fallback strength keywords used when the passage yields no candidates
pub const DEFAULT_STRENGTH_KEYWORDS: [&str; 2] = ["뛰어난", "리더십"];

/// Fallback second strength keyword when exactly one candidate is found
pub const DEFAULT_SECOND_STRENGTH: &str = "소통능력";

/// Fallback weakness keyword used when the passage yields no candidates
pub const DEFAULT_WEAKNESS_KEYWORD: &str = "피드백";

/// Keyword-based leadership summarizer
///
/// Given free-text strength and weakness passages, extracts nouns through the
/// injected [`Tokenizer`], ranks them by frequency, and fills three fixed
/// sentence templates. The fallback keywords guarantee a complete summary for
/// any input, including empty passages.
///
/// # Invariants
/// - Output is always exactly 3 sentences
/// - Sentence 1 carries the top two strength keywords
/// - Sentence 2 carries the top weakness keyword
/// - Sentence 3 reuses the top strength keyword
///
/// Pure apart from the tokenizer call: no I/O, no shared state, deterministic
/// for a deterministic tokenizer.
pub struct KeywordSummarizer {
    tokenizer: Arc<dyn Tokenizer>,
}

impl KeywordSummarizer {
    /// Creates a summarizer over the given tokenizer
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }

    /// Summarizes the two passages into three fixed-format sentences
    pub fn summarize(&self, strengths: &str, weaknesses: &str) -> Summary {
        let mut strength_keywords = top_keywords(&self.tokenizer.nouns(strengths), 2);
        let weakness_keywords = top_keywords(&self.tokenizer.nouns(weaknesses), 1);

        if strength_keywords.is_empty() {
            strength_keywords = DEFAULT_STRENGTH_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect();
        } else if strength_keywords.len() == 1 {
            strength_keywords.push(DEFAULT_SECOND_STRENGTH.to_string());
        }

        let weakness = weakness_keywords
            .into_iter()
            .next()
            .unwrap_or_else(|| DEFAULT_WEAKNESS_KEYWORD.to_string());

        Summary::from_sentences([
            strength_sentence(&strength_keywords[0], &strength_keywords[1]),
            weakness_sentence(&weakness),
            profile_sentence(&strength_keywords[0]),
        ])
    }
}

// Sentence templates
//
// Each template stays under 12 words and ends in the assertive "함"/"임"
// register required of the summary format.

fn strength_sentence(first: &str, second: &str) -> String {
    format!("뛰어난 {} 및 {} 역량을 보유함.", first, second)
}

fn weakness_sentence(keyword: &str) -> String {
    format!("다만 {} 역량은 일부 보완이 필요함.", keyword)
}

fn profile_sentence(first: &str) -> String {
    format!("종합적으로 {} 기반의 소통형 리더임.", first)
}
