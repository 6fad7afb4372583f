use serde::Serialize;

/// Number of questions generated when the request does not specify one.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

/// A single multiple-choice question.
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options` of the right answer.
    pub correct: usize,
    pub explanation: String,
}

/// A generated quiz for a topic.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub topic: String,
    pub questions: Vec<QuizQuestion>,
    pub total_questions: usize,
    pub estimated_time: String,
}

/// Build a quiz of up to `count` questions on `topic` from the fixed
/// template pool. At most 7 questions exist; asking for more clamps.
pub fn generate_quiz(topic: &str, count: usize) -> Quiz {
    let questions: Vec<QuizQuestion> =
        question_templates(topic).into_iter().take(count).collect();
    let total_questions = questions.len();

    Quiz {
        topic: topic.to_string(),
        questions,
        total_questions,
        estimated_time: format!("{} minutes", total_questions * 2),
    }
}

fn question_templates(topic: &str) -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            question: format!("What is the primary purpose of {topic}?"),
            options: vec![
                "To provide a structured approach to understanding complex systems".to_string(),
                "To replace all existing methodologies".to_string(),
                "To simplify unrelated concepts".to_string(),
                "To eliminate the need for further study".to_string(),
            ],
            correct: 0,
            explanation: format!(
                "{topic} primarily aims to provide structured understanding of complex systems \
                 through organized principles."
            ),
        },
        QuizQuestion {
            question: format!(
                "Which of the following best describes a key characteristic of {topic}?"
            ),
            options: vec![
                "It only works in theoretical scenarios".to_string(),
                "It builds upon foundational principles and scales to complex applications"
                    .to_string(),
                "It requires no prerequisite knowledge".to_string(),
                "It cannot be applied practically".to_string(),
            ],
            correct: 1,
            explanation: format!(
                "A key characteristic is that it builds on foundations and scales — this is \
                 what makes {topic} powerful and versatile."
            ),
        },
        QuizQuestion {
            question: format!("What is a common misconception about {topic}?"),
            options: vec![
                "It requires deep understanding".to_string(),
                "It has practical applications".to_string(),
                "It can be mastered through memorization alone".to_string(),
                "It connects to other disciplines".to_string(),
            ],
            correct: 2,
            explanation: format!(
                "Many students think {topic} can be memorized, but true mastery requires \
                 understanding and application."
            ),
        },
        QuizQuestion {
            question: format!("In what context is {topic} most commonly applied?"),
            options: vec![
                "Only in academic research".to_string(),
                "In problem-solving and analytical thinking across multiple domains".to_string(),
                "Exclusively in laboratory settings".to_string(),
                "Only in standardized testing".to_string(),
            ],
            correct: 1,
            explanation: format!(
                "{topic} finds its most common application in problem-solving across various \
                 domains."
            ),
        },
        QuizQuestion {
            question: format!(
                "What prerequisite knowledge is most helpful for understanding {topic}?"
            ),
            options: vec![
                "No prerequisites are needed".to_string(),
                "Only advanced mathematics".to_string(),
                "Basic foundational concepts in the related field".to_string(),
                "Expert-level domain knowledge".to_string(),
            ],
            correct: 2,
            explanation: format!(
                "Having basic foundational concepts helps build a strong understanding of \
                 {topic}."
            ),
        },
        QuizQuestion {
            question: format!("How does {topic} relate to real-world problem solving?"),
            options: vec![
                "It has no real-world applications".to_string(),
                "It provides frameworks that can be adapted to solve practical problems"
                    .to_string(),
                "It only applies to textbook problems".to_string(),
                "It makes problems more complicated".to_string(),
            ],
            correct: 1,
            explanation: format!(
                "{topic} provides adaptable frameworks for solving real-world problems \
                 effectively."
            ),
        },
        QuizQuestion {
            question: format!("What is the best approach to studying {topic}?"),
            options: vec![
                "Read once and move on".to_string(),
                "Memorize all formulas without understanding".to_string(),
                "Practice with examples and understand underlying principles".to_string(),
                "Skip the basics and jump to advanced topics".to_string(),
            ],
            correct: 2,
            explanation: "The most effective approach combines practice with understanding of \
                          underlying principles."
                .to_string(),
        },
    ]
}
