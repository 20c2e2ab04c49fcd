//! Selection of the subtree to render.

use log::debug;

use crate::converter::utility::content::find_element;
use crate::options::RootMode;

/// The part of the document handed to the renderer.
pub(crate) enum RenderRoot<'d> {
    /// A single element, rendered as pass-through.
    Element(tl::NodeHandle),
    /// Every top-level node of the parsed document.
    Document(&'d [tl::NodeHandle]),
    /// Strict mode found no `<section>`.
    Missing,
}

/// Pick the first `<section>`, else the first `<body>`, else the whole document.
///
/// In [`RootMode::Strict`] only a `<section>` is accepted.
pub(crate) fn locate_root<'d>(
    document: &'d [tl::NodeHandle],
    parser: &tl::Parser<'_>,
    mode: RootMode,
) -> RenderRoot<'d> {
    if let Some(section) = find_element(document, parser, &|name, _| name == "section") {
        debug!("rendering from <section>");
        return RenderRoot::Element(section);
    }

    if mode == RootMode::Strict {
        debug!("no <section> found in strict mode");
        return RenderRoot::Missing;
    }

    if let Some(body) = find_element(document, parser, &|name, _| name == "body") {
        debug!("no <section> found, rendering from <body>");
        return RenderRoot::Element(body);
    }

    debug!("no <section> or <body> found, rendering the whole document");
    RenderRoot::Document(document)
}
