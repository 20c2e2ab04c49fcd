//! Inline element helpers: emphasis wrappers and links.

/// Surround rendered content with a symmetric marker (`**`, `*`, `` ` ``).
pub(crate) fn wrap_inline(marker: &str, content: &str) -> String {
    let mut output = String::with_capacity(content.len() + marker.len() * 2);
    output.push_str(marker);
    output.push_str(content);
    output.push_str(marker);
    output
}

/// Append `[label](href)` to `output`.
pub(crate) fn append_markdown_link(output: &mut String, label: &str, href: &str) {
    output.push('[');
    output.push_str(label);
    output.push_str("](");
    output.push_str(href);
    output.push(')');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_inline() {
        assert_eq!(wrap_inline("**", "b"), "**b**");
        assert_eq!(wrap_inline("`", "git -w"), "`git -w`");
    }

    #[test]
    fn test_append_markdown_link() {
        let mut output = String::from("see ");
        append_markdown_link(&mut output, "Pro Git", "https://git-scm.com/book/ko/v2");
        assert_eq!(output, "see [Pro Git](https://git-scm.com/book/ko/v2)");
    }
}
