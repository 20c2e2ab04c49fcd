//! Closed set of tag kinds the renderer dispatches on.

/// Custom element DeckDeckGo uses for syntax-highlighted code.
pub(crate) const HIGHLIGHT_CODE_TAG: &str = "deckgo-highlight-code";

/// Element kinds with dedicated rendering rules.
///
/// Everything else is [`TagKind::Other`] and renders as pass-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagKind<'a> {
    Heading(u8),
    Paragraph,
    Strong,
    Emphasis,
    Code,
    Link,
    UnorderedList,
    OrderedList,
    ListItem,
    HighlightCode,
    HorizontalRule,
    LineBreak,
    Table,
    /// `thead`, `tbody` or `tfoot`.
    TableSection,
    TableRow,
    /// `th` or `td`.
    TableCell,
    Other(&'a str),
}

impl<'a> TagKind<'a> {
    /// Classify a lowercased tag name.
    pub(crate) fn from_name(name: &'a str) -> Self {
        match name {
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "p" => Self::Paragraph,
            "strong" | "b" => Self::Strong,
            "em" | "i" => Self::Emphasis,
            "code" => Self::Code,
            "a" => Self::Link,
            "ul" => Self::UnorderedList,
            "ol" => Self::OrderedList,
            "li" => Self::ListItem,
            HIGHLIGHT_CODE_TAG => Self::HighlightCode,
            "hr" => Self::HorizontalRule,
            "br" => Self::LineBreak,
            "table" => Self::Table,
            "thead" | "tbody" | "tfoot" => Self::TableSection,
            "tr" => Self::TableRow,
            "th" | "td" => Self::TableCell,
            other => Self::Other(other),
        }
    }

    /// Whether the element sits inside running text.
    ///
    /// Text next to an inline element keeps one separating space.
    pub(crate) fn is_inline(self) -> bool {
        match self {
            Self::Strong | Self::Emphasis | Self::Code | Self::Link => true,
            Self::Other(name) => matches!(
                name,
                "span"
                    | "u"
                    | "s"
                    | "mark"
                    | "small"
                    | "sub"
                    | "sup"
                    | "abbr"
                    | "kbd"
                    | "samp"
                    | "var"
                    | "q"
                    | "cite"
                    | "del"
                    | "ins"
                    | "time"
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        for level in 1..=6u8 {
            let name = format!("h{level}");
            assert_eq!(TagKind::from_name(&name), TagKind::Heading(level));
        }
        assert_eq!(TagKind::from_name("h7"), TagKind::Other("h7"));
    }

    #[test]
    fn test_aliases_share_a_kind() {
        assert_eq!(TagKind::from_name("b"), TagKind::Strong);
        assert_eq!(TagKind::from_name("i"), TagKind::Emphasis);
        assert_eq!(TagKind::from_name("td"), TagKind::from_name("th"));
        assert_eq!(TagKind::from_name("tbody"), TagKind::from_name("thead"));
    }

    #[test]
    fn test_custom_element() {
        assert_eq!(TagKind::from_name("deckgo-highlight-code"), TagKind::HighlightCode);
        assert_eq!(TagKind::from_name("deckgo-slide-title"), TagKind::Other("deckgo-slide-title"));
    }

    #[test]
    fn test_inline_classification() {
        assert!(TagKind::from_name("strong").is_inline());
        assert!(TagKind::from_name("a").is_inline());
        assert!(TagKind::from_name("span").is_inline());
        assert!(!TagKind::from_name("br").is_inline());
        assert!(!TagKind::from_name("p").is_inline());
        assert!(!TagKind::from_name("section").is_inline());
    }
}
