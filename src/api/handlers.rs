use axum::Json;
use tracing::info;

use crate::core::models::{
    ChatRequest, ExplainRequest, FlashcardsRequest, QuizRequest, SummarizeRequest,
};
use crate::engine::chat::{ChatReply, generate_chat_reply};
use crate::engine::explain::{Explanation, generate_explanation};
use crate::engine::flashcards::{DEFAULT_CARD_COUNT, FlashcardDeck, generate_flashcards};
use crate::engine::quiz::{DEFAULT_QUESTION_COUNT, Quiz, generate_quiz};
use crate::engine::summarize::{SummaryResult, generate_summary};
use crate::errors::ApiError;
use crate::utils::sanitize::sanitize_topic;

/// `POST /api/explain`
pub async fn explain(Json(req): Json<ExplainRequest>) -> Result<Json<Explanation>, ApiError> {
    let topic = checked_topic(&req.topic)?;
    info!(topic = %topic, level = %req.level, "explain requested");
    Ok(Json(generate_explanation(&topic, &req.level)))
}

/// `POST /api/summarize`
///
/// The summarizer is total over all string inputs, so the raw text is
/// passed through untouched and the handler cannot fail.
pub async fn summarize(Json(req): Json<SummarizeRequest>) -> Json<SummaryResult> {
    info!(chars = req.text.len(), "summarize requested");
    Json(generate_summary(&req.text))
}

/// `POST /api/quiz`
pub async fn quiz(Json(req): Json<QuizRequest>) -> Result<Json<Quiz>, ApiError> {
    let topic = checked_topic(&req.topic)?;
    let count = req.count.map_or(DEFAULT_QUESTION_COUNT, |n| n as usize);
    info!(topic = %topic, count, "quiz requested");
    Ok(Json(generate_quiz(&topic, count)))
}

/// `POST /api/flashcards`
pub async fn flashcards(
    Json(req): Json<FlashcardsRequest>,
) -> Result<Json<FlashcardDeck>, ApiError> {
    let topic = checked_topic(&req.topic)?;
    let count = req.count.map_or(DEFAULT_CARD_COUNT, |n| n as usize);
    info!(topic = %topic, count, "flashcards requested");
    Ok(Json(generate_flashcards(&topic, count)))
}

/// `POST /api/chat`
pub async fn chat(Json(req): Json<ChatRequest>) -> Json<ChatReply> {
    info!(chars = req.message.len(), turns = req.history.len(), "chat requested");
    Json(generate_chat_reply(&req.message, &req.history))
}

/// Sanitize a topic and reject requests where nothing is left of it.
fn checked_topic(raw: &str) -> Result<String, ApiError> {
    let topic = sanitize_topic(raw);
    if topic.is_empty() {
        return Err(ApiError::BadRequest("Topic must not be empty".to_string()));
    }
    Ok(topic)
}
