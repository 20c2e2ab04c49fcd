//! DOM navigation and text extraction over the `tl` tree.

use std::borrow::Cow;

use crate::text::decode_html_entities;

/// Lowercase a tag name, borrowing when it already is.
pub(crate) fn normalized_tag_name(name: Cow<'_, str>) -> Cow<'_, str> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        name
    }
}

/// Resolve a handle to an element, skipping text and comment nodes.
pub(crate) fn element<'p, 'buf>(handle: tl::NodeHandle, parser: &'p tl::Parser<'buf>) -> Option<&'p tl::HTMLTag<'buf>> {
    match handle.get(parser)? {
        tl::Node::Tag(tag) => Some(tag),
        _ => None,
    }
}

/// Direct children of an element, in document order.
pub(crate) fn child_handles(tag: &tl::HTMLTag<'_>) -> Vec<tl::NodeHandle> {
    tag.children().top().iter().copied().collect()
}

/// Concatenated, entity-decoded text of a node and all its descendants.
pub(crate) fn get_text_content(handle: tl::NodeHandle, parser: &tl::Parser<'_>) -> String {
    let mut text = String::new();
    push_text_content(handle, parser, &mut text);
    text
}

fn push_text_content(handle: tl::NodeHandle, parser: &tl::Parser<'_>, output: &mut String) {
    match handle.get(parser) {
        Some(tl::Node::Raw(bytes)) => output.push_str(&decode_html_entities(&bytes.as_utf8_str())),
        Some(tl::Node::Tag(tag)) => {
            for child in child_handles(tag) {
                push_text_content(child, parser, output);
            }
        }
        _ => {}
    }
}

/// First element in document order at or below `handles` matching `is_match`.
pub(crate) fn find_element<F>(handles: &[tl::NodeHandle], parser: &tl::Parser<'_>, is_match: &F) -> Option<tl::NodeHandle>
where
    F: Fn(&str, &tl::HTMLTag<'_>) -> bool,
{
    find_element_within(handles, parser, is_match, &|_| true)
}

/// Like [`find_element`], but only descends into elements whose name passes `descend`.
pub(crate) fn find_element_within<F, D>(
    handles: &[tl::NodeHandle],
    parser: &tl::Parser<'_>,
    is_match: &F,
    descend: &D,
) -> Option<tl::NodeHandle>
where
    F: Fn(&str, &tl::HTMLTag<'_>) -> bool,
    D: Fn(&str) -> bool,
{
    for &handle in handles {
        let Some(tag) = element(handle, parser) else {
            continue;
        };
        let name = normalized_tag_name(tag.name().as_utf8_str());
        if is_match(&name, tag) {
            return Some(handle);
        }
        if descend(&name) {
            if let Some(found) = find_element_within(&child_handles(tag), parser, is_match, descend) {
                return Some(found);
            }
        }
    }
    None
}
