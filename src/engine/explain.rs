use serde::Serialize;

/// Templated explanation of a topic at a requested depth.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub topic: String,
    pub level: String,
    pub explanation: String,
    pub related_topics: Vec<String>,
    pub estimated_read_time: String,
}

/// Build an explanation of `topic` at `level`.
///
/// Recognized levels are `simple`, `intermediate` and `advanced`; any
/// other value falls back to the simple template body. The read-time
/// estimate keys off the raw level string, so an unrecognized level gets
/// the simple body with the `"10 min"` estimate.
pub fn generate_explanation(topic: &str, level: &str) -> Explanation {
    let explanation = match level {
        "intermediate" => intermediate_explanation(topic),
        "advanced" => advanced_explanation(topic),
        _ => simple_explanation(topic),
    };

    let estimated_read_time = match level {
        "simple" => "2 min",
        "intermediate" => "5 min",
        _ => "10 min",
    };

    Explanation {
        topic: topic.to_string(),
        level: level.to_string(),
        explanation,
        related_topics: related_topics(topic),
        estimated_read_time: estimated_read_time.to_string(),
    }
}

/// First 3 of the fixed related-topic patterns.
fn related_topics(topic: &str) -> Vec<String> {
    let related = [
        format!("Advanced {topic}"),
        format!("{topic} in Practice"),
        format!("History of {topic}"),
        format!("{topic} vs Alternatives"),
        format!("Applications of {topic}"),
    ];
    related.into_iter().take(3).collect()
}

fn simple_explanation(topic: &str) -> String {
    format!(
        "Let me explain **{topic}** in simple terms:\n\n\
         Think of {topic} like a recipe 🍳. Just as a recipe has step-by-step instructions to \
         make a dish, {topic} follows a structured approach to achieve its goal.\n\n\
         **Key Points:**\n\
         • It's a fundamental concept that builds on basic principles\n\
         • You can think of it as connecting simple ideas together\n\
         • Real-world example: Just like building blocks, each piece fits together\n\n\
         **Why it matters:** Understanding {topic} helps you see the bigger picture and solve \
         related problems more easily."
    )
}

fn intermediate_explanation(topic: &str) -> String {
    format!(
        "## {topic} — Intermediate Explanation\n\n\
         {topic} is a concept that operates on several interconnected principles:\n\n\
         ### Core Mechanism\n\
         At its heart, {topic} works by processing information through defined stages. Each \
         stage transforms the input in a specific way.\n\n\
         ### Key Components\n\
         1. **Foundation Layer** — The base principles that {topic} relies on\n\
         2. **Processing Layer** — Where the main transformation happens\n\
         3. **Output Layer** — The results and applications\n\n\
         ### Practical Application\n\
         In practice, {topic} is used to solve problems like optimization, pattern \
         recognition, and structured analysis.\n\n\
         ### Common Misconceptions\n\
         - It's NOT just memorization — it requires understanding\n\
         - It builds upon prerequisite knowledge\n\
         - Mastery comes through practice and application"
    )
}

fn advanced_explanation(topic: &str) -> String {
    format!(
        "## {topic} — Advanced Deep Dive\n\n\
         ### Theoretical Foundation\n\
         {topic} emerges from the intersection of multiple disciplines. Its formal definition \
         involves rigorous mathematical and logical frameworks.\n\n\
         ### Formal Definition\n\
         Let *S* be the system under study. {topic} can be formally described as a mapping \
         *f: X → Y* where the transformation preserves certain invariant properties.\n\n\
         ### Advanced Properties\n\
         1. **Composability** — Complex instances can be decomposed into simpler sub-problems\n\
         2. **Scalability** — The approach generalizes across different scales\n\
         3. **Optimality** — Under certain constraints, provably optimal solutions exist\n\n\
         ### Research Frontiers\n\
         Current research in {topic} focuses on:\n\
         - Extending theoretical bounds\n\
         - Novel applications in emerging fields\n\
         - Computational efficiency improvements\n\n\
         ### Critical Analysis\n\
         While powerful, {topic} has known limitations including edge cases and computational \
         complexity constraints that active research aims to address."
    )
}
