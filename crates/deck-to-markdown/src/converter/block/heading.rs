//! ATX headings.

/// Push `#`×level, a space, the heading text and a blank line.
pub(crate) fn push_heading(output: &mut String, level: u8, text: &str) {
    for _ in 0..level {
        output.push('#');
    }
    output.push(' ');
    output.push_str(text);
    output.push_str("\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_heading_levels() {
        let mut output = String::new();
        push_heading(&mut output, 3, "Git docs");
        assert_eq!(output, "### Git docs\n\n");
    }
}
