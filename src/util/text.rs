// src/util/text.rs
use html_escape::decode_html_entities;
use regex::Regex;
use std::sync::LazyLock;

static BLOCK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?(p|div|br|li|h[1-6])[^>]*>").expect("valid block tag pattern"));
static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));

/// First non-empty line of rich-text content, as plain text.
///
/// Entities are decoded, block tags become line breaks, other tags are
/// dropped. Math delimiters are left alone.
///
/// # Examples
///
/// ```
/// use lessondesk::util::text::extract_first_line;
///
/// let html = "<p>Solve $x^2 = 4$</p><p>Show your work</p>";
/// assert_eq!(extract_first_line(html), "Solve $x^2 = 4$");
/// ```
pub fn extract_first_line(html: &str) -> String {
    let decoded = decode_html_entities(html);
    let broken = BLOCK_TAG.replace_all(&decoded, "\n");
    let plain = ANY_TAG.replace_all(&broken, "");

    plain
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// One-line table preview of a description.
pub fn description_preview(html: &str, max_chars: usize) -> String {
    truncate(&extract_first_line(html), max_chars)
}

/// Shorten `s` to `max_chars` characters, marking the cut with "...".
///
/// ```
/// use lessondesk::util::text::truncate;
///
/// assert_eq!(truncate("Identify rational numbers", 8), "Identify...");
/// assert_eq!(truncate("Limits", 8), "Limits");
/// ```
pub fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}
