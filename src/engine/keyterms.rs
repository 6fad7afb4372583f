use once_cell::sync::Lazy;
use regex::Regex;

use crate::engine::stopwords::is_stop_word;

/// Maximum number of ranked terms returned.
pub const MAX_KEY_TERMS: usize = 6;

/// Cleaned tokens must be strictly longer than this to count.
pub const MIN_TERM_LENGTH: usize = 3;

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static regex compile"));

/// Extract up to [`MAX_KEY_TERMS`] key terms from `text`, ranked by
/// descending frequency.
///
/// Tokens are lowercased, stripped of every character outside `a`-`z`
/// (digits, punctuation and accented letters are removed), and dropped if
/// the cleaned form is [`MIN_TERM_LENGTH`] characters or shorter or is a
/// stop word. Ties in frequency keep first-encountered order.
pub fn extract_key_terms(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    // Counts keep insertion order so the stable sort below breaks ties by
    // first occurrence.
    let mut counts: Vec<(String, usize)> = Vec::new();
    for token in WHITESPACE_RE.split(&lowered) {
        let clean: String = token.chars().filter(char::is_ascii_lowercase).collect();
        if clean.len() <= MIN_TERM_LENGTH || is_stop_word(&clean) {
            continue;
        }
        match counts.iter_mut().find(|(word, _)| *word == clean) {
            Some((_, count)) => *count += 1,
            None => counts.push((clean, 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(MAX_KEY_TERMS)
        .map(|(word, _)| word)
        .collect()
}
