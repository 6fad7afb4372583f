use axum::Json;

use studybuddy::api::handlers;
use studybuddy::core::models::{
    ChatRequest, ExplainRequest, FlashcardsRequest, QuizRequest, SummarizeRequest,
};
use studybuddy::errors::ApiError;

/// Handler-level tests. The handlers are plain async functions, so they
/// are invoked directly with deserialized request bodies.

#[tokio::test]
async fn test_explain_handler() {
    let request = ExplainRequest {
        topic: "Rust".to_string(),
        level: "simple".to_string(),
    };

    let Json(body) = handlers::explain(Json(request))
        .await
        .expect("valid topic should succeed");
    assert_eq!(body.topic, "Rust");
    assert_eq!(body.estimated_read_time, "2 min");
}

#[tokio::test]
async fn test_explain_rejects_empty_topic() {
    let request = ExplainRequest {
        topic: "  \t ".to_string(),
        level: "simple".to_string(),
    };

    let error = handlers::explain(Json(request))
        .await
        .expect_err("whitespace-only topic should be rejected");
    assert!(
        matches!(error, ApiError::BadRequest(_)),
        "Empty topics should map to a bad-request error"
    );
}

#[tokio::test]
async fn test_explain_sanitizes_topic() {
    let request = ExplainRequest {
        topic: "Ru\u{0007}st".to_string(),
        level: "simple".to_string(),
    };

    let Json(body) = handlers::explain(Json(request)).await.unwrap();
    assert_eq!(
        body.topic, "Rust",
        "Control characters should be stripped before generation"
    );
}

#[tokio::test]
async fn test_summarize_handler_is_total() {
    let Json(body) = handlers::summarize(Json(SummarizeRequest {
        text: String::new(),
    }))
    .await;

    assert_eq!(body.original_word_count, 1);
    assert!(body.summary.starts_with("• "));
}

#[tokio::test]
async fn test_quiz_handler_default_count() {
    let request = QuizRequest {
        topic: "Biology".to_string(),
        count: None,
    };

    let Json(body) = handlers::quiz(Json(request)).await.unwrap();
    assert_eq!(body.total_questions, 5, "Missing count should default to 5");
}

#[tokio::test]
async fn test_quiz_handler_explicit_count() {
    let request = QuizRequest {
        topic: "Biology".to_string(),
        count: Some(100),
    };

    let Json(body) = handlers::quiz(Json(request)).await.unwrap();
    assert_eq!(body.total_questions, 7);
}

#[tokio::test]
async fn test_flashcards_handler_default_count() {
    let request = FlashcardsRequest {
        topic: "Chemistry".to_string(),
        count: None,
    };

    let Json(body) = handlers::flashcards(Json(request)).await.unwrap();
    assert_eq!(body.total_cards, 6, "Missing count should default to 6");
}

#[tokio::test]
async fn test_chat_handler() {
    let request = ChatRequest {
        message: "hello".to_string(),
        history: Vec::new(),
    };

    let Json(body) = handlers::chat(Json(request)).await;
    assert!(!body.reply.is_empty());
    assert_eq!(body.suggestions.len(), 4);
}
