use serde::Deserialize;

use crate::engine::chat::ChatTurn;

/// Body of `POST /api/explain`.
///
/// A missing `level` behaves like an unrecognized one: the simple
/// template body with the default read-time estimate.
#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    pub topic: String,
    #[serde(default)]
    pub level: String,
}

/// Body of `POST /api/summarize`.
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

/// Body of `POST /api/quiz`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub topic: String,
    pub count: Option<u32>,
}

/// Body of `POST /api/flashcards`.
#[derive(Debug, Deserialize)]
pub struct FlashcardsRequest {
    pub topic: String,
    pub count: Option<u32>,
}

/// Body of `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}
