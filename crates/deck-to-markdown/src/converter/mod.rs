//! HTML to Markdown conversion.
//!
//! The pipeline is: `tl` parse (retried after an html5ever repair if it fails),
//! root selection, recursive rendering, then one whitespace normalization pass.

pub(crate) mod block;
pub(crate) mod inline;
pub(crate) mod list;
pub(crate) mod main;
pub(crate) mod root;
pub(crate) mod tag;
pub(crate) mod utility;

pub use main::{NO_SECTION_MESSAGE, convert_html};
