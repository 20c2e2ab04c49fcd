//! Ordered and unordered lists.
//!
//! Only direct `<li>` children become items. A nested list inside an item is
//! rendered as part of that item's inline content, including its own trailing
//! blank line.

use crate::converter::main::Renderer;
use crate::converter::tag::TagKind;
use crate::converter::utility::content::{child_handles, element, normalized_tag_name};

/// Item prefix style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListMarker {
    /// `- `
    Bullet,
    /// `1. `, `2. `, ... always starting at one.
    Numbered,
}

impl ListMarker {
    fn prefix(self, position: usize) -> String {
        match self {
            Self::Bullet => "- ".to_string(),
            Self::Numbered => format!("{position}. "),
        }
    }
}

pub(crate) fn render_list(renderer: &Renderer<'_, '_>, list: &tl::HTMLTag<'_>, marker: ListMarker) -> String {
    let parser = renderer.parser();
    let items: Vec<String> = child_handles(list)
        .into_iter()
        .filter_map(|handle| element(handle, parser))
        .filter(|tag| TagKind::from_name(&normalized_tag_name(tag.name().as_utf8_str())) == TagKind::ListItem)
        .enumerate()
        .map(|(index, item)| {
            let mut line = marker.prefix(index + 1);
            line.push_str(&renderer.render_inline(item));
            line
        })
        .collect();

    let mut output = items.join("\n");
    output.push_str("\n\n");
    output
}
