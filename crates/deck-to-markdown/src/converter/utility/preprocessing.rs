//! Input repair for documents `tl` cannot parse.
//!
//! `tl` is a fast, non-validating parser. When it rejects a document, the input
//! is normalized through html5ever, which produces a well-formed tree.

use log::debug;

/// Re-serialize `input` through html5ever.
///
/// Returns `None` if html5ever could not read or serialize the document.
pub(crate) fn repair_with_html5ever(input: &str) -> Option<String> {
    use html5ever::serialize::{SerializeOpts, serialize};
    use html5ever::tendril::TendrilSink;
    use markup5ever_rcdom::{RcDom, SerializableHandle};

    let dom = match html5ever::parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut input.as_bytes())
    {
        Ok(dom) => dom,
        Err(err) => {
            debug!("html5ever could not read input: {err}");
            return None;
        }
    };

    let mut buf = Vec::with_capacity(input.len());
    let handle = SerializableHandle::from(dom.document);
    serialize(&mut buf, &handle, SerializeOpts::default()).ok()?;
    String::from_utf8(buf).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repair_wraps_fragment_in_document() {
        let repaired = repair_with_html5ever("<section><p>a &amp; b</section>").unwrap();
        assert!(repaired.contains("<body>"));
        assert!(repaired.contains("<section><p>a &amp; b</p></section>"));
    }

    #[test]
    fn test_repair_keeps_custom_elements() {
        let repaired =
            repair_with_html5ever(r#"<deckgo-highlight-code language="bash"><code slot="code">ls</code>"#).unwrap();
        assert!(repaired.contains(r#"<deckgo-highlight-code language="bash"><code slot="code">ls</code></deckgo-highlight-code>"#));
    }
}
