//! Main conversion pipeline for deck HTML to Markdown.
//!
//! This module implements the entry point and the recursive tree walker that
//! turns `tl` DOM nodes into Markdown fragments. Every render call returns its
//! own fragment; parents concatenate their children's fragments in document
//! order.

use log::debug;

use crate::converter::block::code::render_highlight_code;
use crate::converter::block::heading::push_heading;
use crate::converter::block::table::render_table;
use crate::converter::inline::{append_markdown_link, wrap_inline};
use crate::converter::list::{ListMarker, render_list};
use crate::converter::root::{RenderRoot, locate_root};
use crate::converter::tag::TagKind;
use crate::converter::utility::attributes::attr_or_default;
use crate::converter::utility::content::{child_handles, element, normalized_tag_name};
use crate::converter::utility::preprocessing::repair_with_html5ever;
use crate::error::{ConversionError, Result};
use crate::options::ConversionOptions;
use crate::text;

/// Output of a strict-mode conversion when the document has no `<section>`.
pub const NO_SECTION_MESSAGE: &str = "No <section> element found to convert.";

/// Converts deck HTML to Markdown using the provided conversion options.
///
/// `tl` parses the input as given. If it rejects the input, the document is
/// repaired through html5ever and parsed once more before giving up.
pub fn convert_html(html: &str, options: &ConversionOptions) -> Result<String> {
    if let Some(markdown) = render_source(html, options) {
        return Ok(markdown);
    }

    debug!("tl rejected the input, retrying through html5ever");
    let repaired =
        repair_with_html5ever(html).ok_or_else(|| ConversionError::ParseError("Failed to parse HTML".to_string()))?;
    render_source(&repaired, options)
        .ok_or_else(|| ConversionError::ParseError("Failed to parse repaired HTML".to_string()))
}

/// Parse with `tl`, locate the root, render and normalize.
///
/// Returns `None` only when `tl` cannot parse `source`.
fn render_source(source: &str, options: &ConversionOptions) -> Option<String> {
    let dom = tl::parse(source, tl::ParserOptions::default()).ok()?;
    let parser = dom.parser();
    let renderer = Renderer::new(parser, options);

    let markdown = match locate_root(dom.children(), parser, options.root_mode) {
        RenderRoot::Element(handle) => renderer.render_node(handle),
        RenderRoot::Document(children) => renderer.render_children(children),
        RenderRoot::Missing => return Some(NO_SECTION_MESSAGE.to_string()),
    };

    Some(text::postprocess(&markdown))
}

/// Recursive, side-effect free walker over a parsed document.
pub(crate) struct Renderer<'p, 'buf> {
    parser: &'p tl::Parser<'buf>,
    options: &'p ConversionOptions,
}

impl<'p, 'buf> Renderer<'p, 'buf> {
    pub(crate) const fn new(parser: &'p tl::Parser<'buf>, options: &'p ConversionOptions) -> Self {
        Self { parser, options }
    }

    pub(crate) const fn parser(&self) -> &'p tl::Parser<'buf> {
        self.parser
    }

    pub(crate) const fn options(&self) -> &'p ConversionOptions {
        self.options
    }

    /// Render a node that has no siblings to consider.
    pub(crate) fn render_node(&self, handle: tl::NodeHandle) -> String {
        self.render_children(&[handle])
    }

    /// Render sibling nodes in order and concatenate their fragments.
    pub(crate) fn render_children(&self, handles: &[tl::NodeHandle]) -> String {
        let mut output = String::new();
        for (index, handle) in handles.iter().enumerate() {
            match handle.get(self.parser) {
                Some(tl::Node::Raw(bytes)) => {
                    output.push_str(&self.render_text(&bytes.as_utf8_str(), handles, index));
                }
                Some(tl::Node::Tag(tag)) => output.push_str(&self.render_tag(tag)),
                Some(tl::Node::Comment(_)) | None => {}
            }
        }
        output
    }

    /// Render all children of an element.
    pub(crate) fn render_inline(&self, tag: &tl::HTMLTag<'_>) -> String {
        self.render_children(&child_handles(tag))
    }

    /// Text nodes are trimmed; one space survives next to an inline sibling.
    fn render_text(&self, raw: &str, siblings: &[tl::NodeHandle], index: usize) -> String {
        let decoded = text::decode_html_entities(raw);
        let (prefix, suffix, core) = text::chomp(&decoded);

        let prev_inline = index
            .checked_sub(1)
            .and_then(|prev| siblings.get(prev))
            .is_some_and(|handle| self.is_inline_element(*handle));
        let next_inline = siblings
            .get(index + 1)
            .is_some_and(|handle| self.is_inline_element(*handle));

        if core.is_empty() {
            if prev_inline && next_inline && !decoded.is_empty() {
                return " ".to_string();
            }
            return String::new();
        }

        let mut output = String::with_capacity(core.len() + 2);
        if prev_inline {
            output.push_str(prefix);
        }
        output.push_str(core);
        if next_inline {
            output.push_str(suffix);
        }
        output
    }

    fn is_inline_element(&self, handle: tl::NodeHandle) -> bool {
        element(handle, self.parser).is_some_and(|tag| {
            let name = normalized_tag_name(tag.name().as_utf8_str());
            TagKind::from_name(&name).is_inline()
        })
    }

    fn render_tag(&self, tag: &tl::HTMLTag<'_>) -> String {
        let name = normalized_tag_name(tag.name().as_utf8_str());

        match TagKind::from_name(&name) {
            TagKind::Table => render_table(self, tag),
            TagKind::Heading(level) => {
                let mut output = String::new();
                push_heading(&mut output, level, &self.render_inline(tag));
                output
            }
            TagKind::Paragraph => {
                let mut output = self.render_inline(tag);
                output.push_str("\n\n");
                output
            }
            TagKind::Strong => wrap_inline("**", &self.render_inline(tag)),
            TagKind::Emphasis => wrap_inline("*", &self.render_inline(tag)),
            TagKind::Code => wrap_inline("`", &self.render_inline(tag)),
            TagKind::Link => {
                let label = self.render_inline(tag);
                let href = attr_or_default(tag, "href");
                let mut output = String::with_capacity(label.len() + href.len() + 4);
                append_markdown_link(&mut output, &label, &href);
                output
            }
            TagKind::UnorderedList => render_list(self, tag, ListMarker::Bullet),
            TagKind::OrderedList => render_list(self, tag, ListMarker::Numbered),
            TagKind::HighlightCode => render_highlight_code(tag, self.parser),
            TagKind::HorizontalRule => "---\n\n".to_string(),
            TagKind::LineBreak => "\n".to_string(),
            TagKind::TableSection
            | TagKind::TableRow
            | TagKind::TableCell
            | TagKind::ListItem
            | TagKind::Other(_) => self.render_inline(tag),
        }
    }
}
