use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::engine::keyterms::extract_key_terms;

/// Maximum number of bullet points in a summary.
pub const MAX_BULLETS: usize = 5;

/// Sentence fragments must be strictly longer than this (after trimming)
/// to be eligible for the summary.
pub const MIN_SENTENCE_LENGTH: usize = 10;

/// Generic bullets used when the text has no eligible sentences.
pub const FALLBACK_BULLETS: [&str; 4] = [
    "The text discusses key concepts and their relationships",
    "Main ideas are presented with supporting evidence",
    "Practical applications are highlighted",
    "Important terminology is defined and explained",
];

static SENTENCE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("static regex compile"));

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static regex compile"));

/// Result of summarizing a piece of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    /// Bullet-point summary, one `"• "`-prefixed line per sentence.
    pub summary: String,
    /// Up to 6 lowercase terms ranked by descending frequency.
    pub key_terms: Vec<String>,
    pub original_word_count: usize,
    pub summary_word_count: usize,
    /// Percentage reduction in word count, e.g. `"62%"`.
    pub compression_ratio: String,
}

/// Count whitespace-delimited tokens, keeping empty fragments at the
/// edges: the empty string counts as 1 and `" a b "` counts as 4.
fn word_count(text: &str) -> usize {
    WHITESPACE_RE.split(text).count()
}

/// Rounds half toward positive infinity.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Select up to [`MAX_BULLETS`] representative sentences from `text`,
/// evenly spaced across the document in original order.
///
/// Falls back to [`FALLBACK_BULLETS`] when no sentence survives the
/// length threshold.
fn select_sentences(text: &str) -> Vec<String> {
    let sentences: Vec<&str> = SENTENCE_SPLIT_RE
        .split(text)
        .filter(|fragment| fragment.trim().chars().count() > MIN_SENTENCE_LENGTH)
        .collect();

    if sentences.is_empty() {
        return FALLBACK_BULLETS.iter().map(ToString::to_string).collect();
    }

    let step = (sentences.len() / MAX_BULLETS).max(1);
    let mut bullets = Vec::new();
    let mut index = 0;
    while index < sentences.len() && bullets.len() < MAX_BULLETS {
        bullets.push(sentences[index].trim().to_string());
        index += step;
    }
    bullets
}

/// Produce a bullet-point summary of `text` with ranked key terms and
/// word-count statistics.
///
/// Total over all string inputs: any string, including the empty string,
/// yields a well-formed result. The computation is pure and owns no
/// shared state, so concurrent calls need no coordination.
pub fn generate_summary(text: &str) -> SummaryResult {
    let bullets = select_sentences(text);

    let original_word_count = word_count(text);
    let joined = bullets.join(" ");
    let summary_word_count = word_count(&joined);

    let reduction =
        (1.0 - summary_word_count as f64 / original_word_count.max(1) as f64) * 100.0;

    SummaryResult {
        summary: bullets
            .iter()
            .map(|bullet| format!("• {bullet}"))
            .collect::<Vec<_>>()
            .join("\n"),
        key_terms: extract_key_terms(text),
        original_word_count,
        summary_word_count,
        compression_ratio: format!("{}%", round_half_up(reduction)),
    }
}
