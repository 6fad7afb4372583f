use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static H3_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.+)$").expect("static regex"));
static H2_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.+)$").expect("static regex"));
static H1_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.+)$").expect("static regex"));
static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("static regex"));
static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("static regex"));
static ORDERED_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(\d+)\. (.+)$").expect("static regex"));
static BULLET_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[•\-] (.+)$").expect("static regex"));
static INLINE_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.+?)`").expect("static regex"));
static LIST_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(<li>.*?</li>(\s*<br>)?)+").expect("static regex"));

/// Convert a small Markdown subset to HTML.
///
/// Supports headers, bold, italic, ordered and bulleted list items,
/// inline code, paragraph breaks and line breaks. Consecutive list items
/// are wrapped in a `<ul>`, and the whole output in `<p>…</p>`. The
/// empty string renders to the empty string.
pub fn markdown_to_html(md: &str) -> String {
    if md.is_empty() {
        return String::new();
    }

    let html = H3_RE.replace_all(md, "<h3>$1</h3>");
    let html = H2_RE.replace_all(&html, "<h2>$1</h2>");
    let html = H1_RE.replace_all(&html, "<h1>$1</h1>");
    let html = BOLD_RE.replace_all(&html, "<strong>$1</strong>");
    let html = ITALIC_RE.replace_all(&html, "<em>$1</em>");
    let html = ORDERED_ITEM_RE.replace_all(&html, "<li>$2</li>");
    let html = BULLET_ITEM_RE.replace_all(&html, "<li>$1</li>");
    let html = INLINE_CODE_RE.replace_all(&html, "<code>$1</code>");
    let html = html.replace("\n\n", "</p><p>");
    let html = html.replace('\n', "<br>");

    // Gather each run of adjacent <li> elements into a single <ul>,
    // dropping the line breaks between them.
    let html = LIST_RUN_RE.replace_all(&html, |caps: &Captures| {
        format!("<ul>{}</ul>", caps[0].replace("<br>", ""))
    });

    format!("<p>{html}</p>")
}
