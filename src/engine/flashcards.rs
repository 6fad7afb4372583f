use serde::Serialize;

/// Number of cards generated when the request does not specify one.
pub const DEFAULT_CARD_COUNT: usize = 6;

/// One front/back study card.
#[derive(Debug, Clone, Serialize)]
pub struct Flashcard {
    /// 1-based position within the deck.
    pub id: usize,
    pub front: String,
    pub back: String,
    pub mastered: bool,
}

/// A generated deck of flashcards for a topic.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardDeck {
    pub topic: String,
    pub cards: Vec<Flashcard>,
    pub total_cards: usize,
}

/// Build a deck of up to `count` cards on `topic` from the fixed template
/// pool. At most 8 cards exist; asking for more clamps.
pub fn generate_flashcards(topic: &str, count: usize) -> FlashcardDeck {
    let cards: Vec<Flashcard> = card_templates(topic)
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(index, (front, back))| Flashcard {
            id: index + 1,
            front,
            back,
            mastered: false,
        })
        .collect();
    let total_cards = cards.len();

    FlashcardDeck {
        topic: topic.to_string(),
        cards,
        total_cards,
    }
}

fn card_templates(topic: &str) -> Vec<(String, String)> {
    vec![
        (
            format!("Define {topic}"),
            format!(
                "{topic} is a systematic approach to understanding and applying core principles \
                 within its domain. It involves structured analysis and practical application of \
                 theoretical concepts."
            ),
        ),
        (
            format!("What are the 3 key components of {topic}?"),
            "1. **Foundation** — Core principles and definitions\n\
             2. **Methodology** — Approaches and techniques\n\
             3. **Application** — Real-world use cases and practice"
                .to_string(),
        ),
        (
            format!("Why is {topic} important?"),
            format!(
                "{topic} is important because it:\n\
                 • Builds critical thinking skills\n\
                 • Provides structured problem-solving frameworks\n\
                 • Connects theory to practice\n\
                 • Enables deeper understanding of related concepts"
            ),
        ),
        (
            format!("Common mistake when studying {topic}?"),
            "The most common mistake is **rote memorization** without understanding.\n\n\
             Instead, focus on:\n\
             • Understanding the 'why' behind concepts\n\
             • Practicing with varied examples\n\
             • Making connections to prior knowledge"
                .to_string(),
        ),
        (
            format!("How to apply {topic} in practice?"),
            format!(
                "Step-by-step application:\n\
                 1. Identify the problem context\n\
                 2. Map relevant principles from {topic}\n\
                 3. Design a solution using appropriate methods\n\
                 4. Test and validate your approach\n\
                 5. Iterate and refine"
            ),
        ),
        (
            format!("{topic}: Key formula/principle"),
            format!(
                "The fundamental principle states that complex problems in {topic} can be \
                 decomposed into simpler sub-problems.\n\n\
                 **Remember:** Start simple, build complexity gradually, and always verify your \
                 understanding."
            ),
        ),
        (
            format!("What connects {topic} to other subjects?"),
            format!(
                "{topic} shares connections with:\n\
                 • **Logic** — Structured reasoning\n\
                 • **Mathematics** — Quantitative analysis\n\
                 • **Science** — Empirical validation\n\
                 • **Communication** — Clear expression of ideas"
            ),
        ),
        (
            format!("Quick review: {topic} essentials"),
            "✅ Understand core definitions\n\
             ✅ Know the key principles\n\
             ✅ Practice with examples\n\
             ✅ Connect to real-world scenarios\n\
             ✅ Review and self-test regularly"
                .to_string(),
        ),
    ]
}
