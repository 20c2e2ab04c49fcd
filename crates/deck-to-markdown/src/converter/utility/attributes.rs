//! Attribute access with explicit defaults.
//!
//! Missing attributes are never an error: callers get `None` or the default
//! value for the attribute's type.

use crate::text::decode_html_entities;

/// Entity-decoded value of `name`, or `None` when absent or valueless.
pub(crate) fn get_attr(tag: &tl::HTMLTag<'_>, name: &'static str) -> Option<String> {
    tag.attributes()
        .get(name)
        .flatten()
        .map(|value| decode_html_entities(&value.as_utf8_str()).into_owned())
}

/// Entity-decoded value of `name`, or the empty string.
pub(crate) fn attr_or_default(tag: &tl::HTMLTag<'_>, name: &'static str) -> String {
    get_attr(tag, name).unwrap_or_default()
}

/// Whether `name` is present with exactly `expected` as its value.
pub(crate) fn attr_equals(tag: &tl::HTMLTag<'_>, name: &'static str, expected: &str) -> bool {
    get_attr(tag, name).is_some_and(|value| value == expected)
}
