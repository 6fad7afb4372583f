use chrono::{SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One prior turn of the conversation, as sent by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

/// A canned chat reply with follow-up suggestions.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub reply: String,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub timestamp: String,
    pub suggestions: Vec<String>,
}

/// Lead-in phrases stripped from the message when extracting a topic for
/// the explain-style reply.
static TOPIC_LEAD_IN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)explain|what is|what are|define|please|can you|tell me about")
        .expect("static regex compile")
});

/// Dispatch `message` to the first matching canned reply.
///
/// Matching is on lowercase *substrings*, checked in a fixed order
/// (greeting, explain, quiz, flashcards, summarize, help, thanks,
/// default), so a message containing "this" greets because "this"
/// contains "hi". `history` is accepted for interface compatibility and
/// not consulted.
pub fn generate_chat_reply(message: &str, _history: &[ChatTurn]) -> ChatReply {
    let msg = message.to_lowercase();

    let reply = if contains_any(&msg, &["hello", "hi", "hey"]) {
        greeting_reply()
    } else if contains_any(&msg, &["explain", "what is", "what are", "define"]) {
        let stripped = TOPIC_LEAD_IN_RE.replace_all(message, "");
        let topic = stripped.trim();
        let topic = if topic.is_empty() { "this concept" } else { topic };
        explain_reply(topic)
    } else if contains_any(&msg, &["quiz", "test"]) {
        quiz_reply()
    } else if msg.contains("flashcard") {
        flashcard_reply()
    } else if contains_any(&msg, &["summarize", "summary"]) {
        summarize_reply()
    } else if contains_any(&msg, &["help", "how"]) {
        help_reply()
    } else if msg.contains("thank") {
        thanks_reply()
    } else {
        default_reply(message)
    };

    ChatReply {
        reply,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        suggestions: vec![
            "Explain this in simpler terms".to_string(),
            "Create a quiz on this topic".to_string(),
            "Generate flashcards".to_string(),
            "Give me study tips".to_string(),
        ],
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn greeting_reply() -> String {
    "Hello! 👋 I'm your AI Study Buddy. I can help you with:\n\n\
     📖 **Explaining topics** — Ask me to explain anything!\n\
     📝 **Summarizing notes** — Paste your notes and I'll condense them\n\
     ❓ **Generating quizzes** — Test your knowledge\n\
     🃏 **Creating flashcards** — For quick review\n\n\
     What would you like to study today?"
        .to_string()
}

fn explain_reply(topic: &str) -> String {
    format!(
        "Great question! Let me explain **{topic}**:\n\n\
         **{topic}** is a concept that involves understanding and applying specific principles. \
         Think of it as building blocks — each piece connects to form a complete picture.\n\n\
         **Key takeaways:**\n\
         1. It starts with fundamental principles\n\
         2. Each concept builds on the previous one\n\
         3. Practice and application solidify understanding\n\n\
         Would you like me to go deeper, create a quiz, or make flashcards on this topic? 🎓"
    )
}

fn quiz_reply() -> String {
    "I'd love to help you test your knowledge! 🎯\n\n\
     To generate a quiz, head over to the **Quiz Generator** tab and enter your topic.\n\n\
     Or tell me the subject and I can give you a quick question right here!\n\n\
     What topic would you like to be quizzed on?"
        .to_string()
}

fn flashcard_reply() -> String {
    "Flashcards are a great study tool! 🃏\n\n\
     Check out the **Flashcards** tab to generate a full set.\n\n\
     Or tell me a topic and I'll give you a quick one:\n\n\
     **Front:** What's on your mind?\n**Back:** The answer you're looking for! 😄\n\n\
     What topic should the flashcards cover?"
        .to_string()
}

fn summarize_reply() -> String {
    "I can help summarize your notes! 📝\n\n\
     Head to the **Summarizer** tab and paste your text, or share it here in chat.\n\n\
     I'll extract the key points and give you a concise summary with important terms \
     highlighted."
        .to_string()
}

fn help_reply() -> String {
    "Here's how I can help you study more effectively:\n\n\
     🔹 **Type a question** — I'll answer it conversationally\n\
     🔹 **Use the tabs above** — For specialized tools:\n   \
     • 💡 Explainer — Deep topic explanations\n   \
     • 📝 Summarizer — Condense long notes\n   \
     • ❓ Quiz — Test your knowledge\n   \
     • 🃏 Flashcards — Quick review cards\n\n\
     🔹 **Study tips:**\n   \
     • Break study sessions into 25-min blocks (Pomodoro)\n   \
     • Test yourself regularly with quizzes\n   \
     • Use flashcards for spaced repetition\n\n\
     What would you like to work on?"
        .to_string()
}

fn thanks_reply() -> String {
    "You're welcome! 😊 Happy studying! Remember:\n\n\
     💪 Consistency beats intensity\n\
     🧠 Understanding beats memorization\n\
     📚 Practice makes permanent\n\n\
     I'm here whenever you need help!"
        .to_string()
}

fn default_reply(message: &str) -> String {
    format!(
        "That's an interesting question about \"{message}\"!\n\n\
         Here's what I can tell you:\n\n\
         This topic involves understanding core principles and their applications. The key is \
         to break it down into smaller, manageable concepts.\n\n\
         **My suggestions:**\n\
         1. Start with the basics — make sure fundamentals are solid\n\
         2. Look for patterns and connections\n\
         3. Practice with real examples\n\
         4. Test yourself regularly\n\n\
         Want me to create a quiz or flashcards on this topic? Or would you like a more \
         detailed explanation? 🎓"
    )
}
