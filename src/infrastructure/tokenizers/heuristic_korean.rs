use std::collections::HashSet;

use crate::domain::tokenizer::Tokenizer;

/// Josa (case particle) suffixes stripped from the end of a token,
/// longest match first
const JOSA_SUFFIXES: [&str; 22] = [
    "에게서", "으로써", "으로", "에서", "에게", "부터", "까지", "처럼", "보다", "이나", "은",
    "는", "이", "가", "을", "를", "과", "와", "의", "도", "에", "로",
];

/// Predicate endings: a token carrying one of these is a verb or adjective
/// form; the ending is stripped to recover the verbal-noun stem, longest
/// match first
const PREDICATE_SUFFIXES: [&str; 14] = [
    "했습니다", "해줍니다", "합니다", "입니다", "습니다", "줍니다", "하고", "하며", "해서",
    "하는", "하기", "하다", "한다", "함",
];

/// Functional words that never act as content nouns
const FUNCTIONAL_WORDS: [&str; 18] = [
    "그리고", "그러나", "하지만", "또한", "또는", "너무", "매우", "아주", "항상", "가끔",
    "조금", "정말", "거의", "등", "및", "더", "잘", "좀",
];

/// Best-effort Korean noun extractor
///
/// Splits on whitespace, strips surrounding punctuation, removes one josa or
/// predicate ending per token, and drops known functional words. This is a
/// heuristic stand-in for a full morphological analyzer: it deliberately errs
/// toward keeping a token, since the summarizer only consumes the highest
/// frequency survivors.
#[derive(Debug, Clone)]
pub struct HeuristicKoreanTokenizer {
    functional_words: HashSet<&'static str>,
}

impl Default for HeuristicKoreanTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicKoreanTokenizer {
    pub fn new() -> Self {
        Self {
            functional_words: FUNCTIONAL_WORDS.iter().copied().collect(),
        }
    }

    fn extract(&self, token: &str) -> Option<String> {
        let token = token.trim_matches(|c: char| !c.is_alphanumeric());
        if token.is_empty() || self.functional_words.contains(token) {
            return None;
        }

        for suffix in PREDICATE_SUFFIXES {
            if let Some(stem) = token.strip_suffix(suffix) {
                if stem.is_empty() {
                    return None;
                }
                return Some(stem.to_string());
            }
        }

        for suffix in JOSA_SUFFIXES {
            if let Some(stem) = token.strip_suffix(suffix) {
                // Single-syllable particles overlap with noun endings
                // ("평가" ends in "가"); only strip when a real stem remains
                if stem.chars().count() >= 2 {
                    return Some(stem.to_string());
                }
                break;
            }
        }

        Some(token.to_string())
    }
}

impl Tokenizer for HeuristicKoreanTokenizer {
    fn nouns(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter_map(|token| self.extract(token))
            .collect()
    }
}
