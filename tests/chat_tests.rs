use studybuddy::engine::chat::{ChatTurn, generate_chat_reply};

/// Tests for chat-reply dispatch. Matching is on lowercase substrings in
/// a fixed order, so some surprising inputs are intentionally covered.

#[test]
fn test_greeting() {
    let reply = generate_chat_reply("hello there", &[]);
    assert!(
        reply.reply.starts_with("Hello! 👋"),
        "Greetings should get the welcome reply"
    );
}

#[test]
fn test_substring_dispatch_is_intentional() {
    // "this" contains "hi", and the greeting rule runs before the
    // explain rule, so this message greets.
    let reply = generate_chat_reply("what is this", &[]);
    assert!(reply.reply.starts_with("Hello! 👋"));
}

#[test]
fn test_explain_extracts_topic() {
    let reply = generate_chat_reply("Can you explain recursion", &[]);
    assert!(
        reply.reply.contains("**recursion**"),
        "Lead-in phrases should be stripped from the extracted topic"
    );
}

#[test]
fn test_explain_topic_fallback() {
    // Nothing remains after stripping the lead-in phrase.
    let reply = generate_chat_reply("define", &[]);
    assert!(reply.reply.contains("**this concept**"));
}

#[test]
fn test_quiz_keywords() {
    let quiz = generate_chat_reply("quiz me on biology", &[]);
    assert!(quiz.reply.contains("Quiz Generator"));

    let test = generate_chat_reply("I want a practice test tomorrow", &[]);
    assert!(test.reply.contains("Quiz Generator"));
}

#[test]
fn test_flashcard_keyword() {
    let reply = generate_chat_reply("make me flashcards", &[]);
    assert!(reply.reply.contains("Flashcards are a great study tool"));
}

#[test]
fn test_summary_keywords() {
    let reply = generate_chat_reply("give me a summary", &[]);
    assert!(reply.reply.contains("Summarizer"));
}

#[test]
fn test_help_keywords() {
    let reply = generate_chat_reply("how does gravity work", &[]);
    assert!(reply.reply.contains("study more effectively"));
}

#[test]
fn test_thanks() {
    let reply = generate_chat_reply("thank you so much", &[]);
    assert!(reply.reply.contains("You're welcome"));
}

#[test]
fn test_default_reply_echoes_message() {
    let reply = generate_chat_reply("bananas", &[]);
    assert!(
        reply.reply.contains("\"bananas\""),
        "Unmatched messages should get the default reply with the message echoed"
    );
}

#[test]
fn test_history_is_accepted_but_not_consulted() {
    let history = vec![
        ChatTurn {
            role: "user".to_string(),
            content: "quiz".to_string(),
        },
        ChatTurn {
            role: "bot".to_string(),
            content: "sure".to_string(),
        },
    ];
    let with_history = generate_chat_reply("bananas", &history);
    let without = generate_chat_reply("bananas", &[]);
    assert_eq!(with_history.reply, without.reply);
}

#[test]
fn test_timestamp_is_rfc3339() {
    let reply = generate_chat_reply("hello", &[]);
    assert!(
        chrono::DateTime::parse_from_rfc3339(&reply.timestamp).is_ok(),
        "Timestamp should parse as RFC 3339, got {}",
        reply.timestamp
    );
}

#[test]
fn test_suggestions_are_fixed() {
    let reply = generate_chat_reply("hello", &[]);
    assert_eq!(reply.suggestions.len(), 4);
    assert_eq!(reply.suggestions[0], "Explain this in simpler terms");
}
