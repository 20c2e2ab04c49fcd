//! Convert DeckDeckGo HTML exports into Obsidian-flavored Markdown.
//!
//! The converter understands the small HTML vocabulary a deck export uses:
//! headings, paragraphs, emphasis, inline code, links, lists, tables, rules,
//! line breaks and the `<deckgo-highlight-code>` custom element. Anything else
//! is rendered as pass-through, so its text content survives without markup.
//!
//! ```
//! let html = r#"<section>
//!   <h2>git <strong>help</strong></h2>
//!   <deckgo-highlight-code language="bash"><code slot="code">git help</code></deckgo-highlight-code>
//!   <ul><li>basic commands</li></ul>
//! </section>"#;
//!
//! let markdown = deck_to_markdown::convert(html).unwrap();
//! assert_eq!(markdown, "## git **help**\n\n```bash\ngit help\n```\n\n- basic commands");
//! ```

pub mod error;
pub mod options;

mod converter;
mod text;

pub use converter::NO_SECTION_MESSAGE;
pub use error::{ConversionError, Result};
pub use options::{ConversionOptions, HeaderlessTables, RootMode};
pub use text::postprocess;

/// Convert HTML to Markdown with default options.
///
/// The first `<section>` is rendered if present, else the first `<body>`, else
/// the whole document.
pub fn convert(html: &str) -> Result<String> {
    converter::convert_html(html, &ConversionOptions::default())
}

/// Convert HTML to Markdown with explicit options.
///
/// ```
/// use deck_to_markdown::{ConversionOptions, NO_SECTION_MESSAGE, RootMode};
///
/// let options = ConversionOptions::default().with_root_mode(RootMode::Strict);
/// let markdown = deck_to_markdown::convert_with_options("<p>no slide</p>", &options).unwrap();
/// assert_eq!(markdown, NO_SECTION_MESSAGE);
/// ```
pub fn convert_with_options(html: &str, options: &ConversionOptions) -> Result<String> {
    converter::convert_html(html, options)
}
