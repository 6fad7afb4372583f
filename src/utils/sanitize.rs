/// Max length kept for a topic string (after which we truncate).
pub const MAX_TOPIC_LENGTH: usize = 200;

/// Remove control characters and hard-truncate overly long topics.
///
/// Whitespace at the edges is trimmed first; the result may be empty,
/// which callers treat as a rejected request.
pub fn sanitize_topic(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !c.is_control())
        .take(MAX_TOPIC_LENGTH)
        .collect()
}
