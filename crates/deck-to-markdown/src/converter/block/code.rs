//! DeckDeckGo `<deckgo-highlight-code>` blocks.
//!
//! The element carries the language as an attribute and the literal code in a
//! descendant `<code slot="code">`. The code text is emitted verbatim inside a
//! fenced block.

use crate::converter::utility::attributes::{attr_equals, attr_or_default};
use crate::converter::utility::content::{child_handles, find_element, get_text_content};

/// Render a highlight-code element as a fenced code block.
///
/// Returns an empty string when the element has no `code` slot.
pub(crate) fn render_highlight_code(tag: &tl::HTMLTag<'_>, parser: &tl::Parser<'_>) -> String {
    let Some(code) = find_element(&child_handles(tag), parser, &|name, candidate| {
        name == "code" && attr_equals(candidate, "slot", "code")
    }) else {
        return String::new();
    };

    let language = attr_or_default(tag, "language");
    let code_text = get_text_content(code, parser);

    let mut output = String::with_capacity(code_text.len() + language.len() + 12);
    output.push_str("```");
    output.push_str(&language);
    output.push('\n');
    output.push_str(&code_text);
    output.push_str("\n```\n\n");
    output
}
