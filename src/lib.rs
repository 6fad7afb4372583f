/// Study Buddy - a stateless study-aid backend with deterministic,
/// template-driven content generation.
///
/// The server exposes five JSON endpoints over axum:
/// 1. `/api/explain` - templated topic explanations at three depth levels
/// 2. `/api/summarize` - an extractive summarizer with key-term ranking
/// 3. `/api/quiz` - multiple-choice quiz generation from a template pool
/// 4. `/api/flashcards` - flashcard deck generation from a template pool
/// 5. `/api/chat` - keyword-dispatched canned chat replies
///
/// All other paths serve the front-end assets directory.
///
/// # Architecture
///
/// The system uses:
/// - Axum with tower-http layers for the HTTP surface
/// - Pure, synchronous generator functions in [`engine`] - no shared
///   mutable state, safe under arbitrary concurrent invocation
/// - Tokio for the async runtime
/// - Tracing for structured logging
///
/// # Example
///
/// ```
/// use studybuddy::engine::summarize::generate_summary;
///
/// let result = generate_summary(
///     "Photosynthesis converts light into chemical energy. \
///      Plants use chlorophyll to absorb light.",
/// );
/// assert!(result.summary.starts_with("• "));
/// assert!(result.key_terms.len() <= 6);
/// ```
// Module declarations
pub mod api;
pub mod core;
pub mod engine;
pub mod errors;
pub mod utils;

/// Configure structured logging for the server process.
///
/// Sets up tracing-subscriber with an env-filter controlled level
/// (`RUST_LOG`, defaulting to `info`). Call once at process start.
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
