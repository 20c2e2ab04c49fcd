//! Error types for deck conversion.

use thiserror::Error;

/// Errors that can occur while converting a deck export to Markdown.
///
/// Structurally unusual markup is never an error: unknown tags render as
/// pass-through and missing attributes fall back to defaults. The only failure
/// is a document that no parser accepts.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Neither `tl` nor the html5ever repair pass produced a DOM.
    #[error("HTML parsing error: {0}")]
    ParseError(String),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;
