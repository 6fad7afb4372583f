use studybuddy::engine::keyterms::{MAX_KEY_TERMS, extract_key_terms};
use studybuddy::engine::stopwords::{is_stop_word, stop_word_count};

/// Tests for key-term extraction: token cleaning, stop-word filtering
/// and frequency ranking.

#[test]
fn test_ranking_by_descending_frequency() {
    let terms = extract_key_terms("memory safety memory ownership memory safety");
    assert_eq!(
        terms,
        vec!["memory", "safety", "ownership"],
        "Terms should be ordered by descending occurrence count"
    );
}

#[test]
fn test_frequency_ties_keep_first_encountered_order() {
    let terms = extract_key_terms("alpha beta alpha beta gamma");
    assert_eq!(
        terms,
        vec!["alpha", "beta", "gamma"],
        "Equal counts should preserve first-encountered order"
    );
}

#[test]
fn test_at_most_six_terms() {
    let terms = extract_key_terms("alpha bravo charlie delta echo foxtrot golf hotel");
    assert_eq!(terms.len(), MAX_KEY_TERMS);
    assert_eq!(
        terms,
        vec!["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"],
        "The cap keeps the first six of equally-ranked terms"
    );
}

#[test]
fn test_stop_words_are_excluded() {
    assert!(
        extract_key_terms("because because because").is_empty(),
        "Stop words should never be ranked, regardless of frequency"
    );
}

#[test]
fn test_short_cleaned_tokens_are_dropped() {
    // Cleaning strips digits and accented characters; what remains must
    // be strictly longer than 3 characters.
    assert!(extract_key_terms("web3 web3 web3").is_empty());
    assert!(extract_key_terms("café café").is_empty());
    assert!(extract_key_terms("a an it to").is_empty());
}

#[test]
fn test_punctuation_is_stripped_before_counting() {
    let terms = extract_key_terms("Rust's ecosystem, rusts!");
    assert_eq!(
        terms,
        vec!["rusts", "ecosystem"],
        "Tokens differing only in punctuation should merge after cleaning"
    );
}

#[test]
fn test_empty_text_yields_no_terms() {
    assert!(extract_key_terms("").is_empty());
    assert!(extract_key_terms("   ").is_empty());
}

#[test]
fn test_stop_word_set_contents() {
    assert_eq!(stop_word_count(), 89);
    for word in ["the", "because", "between", "ought", "neither"] {
        assert!(is_stop_word(word), "{word} should be a stop word");
    }
    for word in ["photosynthesis", "rust", "energy"] {
        assert!(!is_stop_word(word), "{word} should not be a stop word");
    }
}
