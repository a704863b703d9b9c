use std::cmp::Reverse;
use std::collections::HashMap;

/// Minimum character length for a noun to qualify as a keyword
///
/// Single-character nouns carry too little meaning to headline a summary and
/// are excluded from ranking entirely, regardless of frequency.
pub const MIN_NOUN_CHARS: usize = 2;

/// Selects the most frequent qualifying nouns from one passage
///
/// Nouns shorter than [`MIN_NOUN_CHARS`] characters are dropped. The rest are
/// ranked by descending occurrence count; nouns with equal counts keep their
/// first-seen order in the token stream, matching the "most common" semantics
/// the summary templates were written against.
///
/// Character length is measured in Unicode scalar values, not bytes, so a
/// two-syllable Hangul noun qualifies.
pub fn top_keywords(nouns: &[String], limit: usize) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for noun in nouns {
        if noun.chars().count() < MIN_NOUN_CHARS {
            continue;
        }
        let count = counts.entry(noun.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(noun.as_str());
        }
        *count += 1;
    }

    // first_seen is already in tie-break order; a stable sort by count alone
    // preserves it among equals
    let mut ranked = first_seen;
    ranked.sort_by_key(|noun| Reverse(counts[*noun]));

    ranked.into_iter().take(limit).map(str::to_string).collect()
}
