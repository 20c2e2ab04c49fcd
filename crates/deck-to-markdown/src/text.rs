//! Text helpers: entity decoding, whitespace chomping and output normalization.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_LINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid blank line regex"));

/// Decode HTML entities (`&amp;`, `&lt;`, `&#39;`, ...) in text or attribute values.
pub(crate) fn decode_html_entities(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}

/// Split text into a leading separator, trailing separator and trimmed core.
///
/// The separators are a single space when the text had surrounding whitespace,
/// otherwise empty.
pub(crate) fn chomp(text: &str) -> (&'static str, &'static str, &str) {
    let core = text.trim();
    if core.is_empty() {
        return ("", "", core);
    }
    let prefix = if text.starts_with(char::is_whitespace) { " " } else { "" };
    let suffix = if text.ends_with(char::is_whitespace) { " " } else { "" };
    (prefix, suffix, core)
}

/// Escape literal pipes so cell text cannot split a table column.
pub(crate) fn escape_table_cell(text: &str) -> Cow<'_, str> {
    if text.contains('|') {
        Cow::Owned(text.replace('|', r"\|"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Normalize a fully rendered document.
///
/// Every run of three or more newlines becomes exactly one blank line, then
/// surrounding whitespace is trimmed. Applying it twice is the same as once.
pub fn postprocess(markdown: &str) -> String {
    BLANK_LINE_RUNS.replace_all(markdown, "\n\n").trim().to_string()
}
