use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Function words excluded from key-term ranking: articles, auxiliaries,
/// prepositions, conjunctions, determiners and pronouns.
const STOP_WORD_LIST: [&str; 89] = [
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "shall", "can",
    "need", "dare", "ought", "used", "to", "of", "in", "for", "on", "with", "at", "by", "from",
    "as", "into", "through", "during", "before", "after", "above", "below", "between", "out",
    "off", "over", "under", "again", "further", "then", "once", "and", "but", "or", "nor", "not",
    "so", "yet", "both", "either", "neither", "each", "every", "all", "any", "few", "more",
    "most", "other", "some", "such", "no", "only", "own", "same", "than", "too", "very", "just",
    "because", "this", "that", "these", "those", "it", "its",
];

static STOP_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORD_LIST.iter().copied().collect());

/// Check whether a cleaned, lowercase token is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Number of entries in the stop-word set.
pub fn stop_word_count() -> usize {
    STOP_WORDS.len()
}
