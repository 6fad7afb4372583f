pub mod handlers;

use axum::Router;
use axum::routing::post;

/// Build the `/api` route table.
///
/// Every generator is a pure function, so the router carries no shared
/// state; static file serving and middleware are layered on by the
/// binary entry point.
pub fn router() -> Router {
    Router::new()
        .route("/api/explain", post(handlers::explain))
        .route("/api/summarize", post(handlers::summarize))
        .route("/api/quiz", post(handlers::quiz))
        .route("/api/flashcards", post(handlers::flashcards))
        .route("/api/chat", post(handlers::chat))
}
