//! Shared helpers for the converter: attribute access, DOM navigation and
//! input repair.

pub(crate) mod attributes;
pub(crate) mod content;
pub(crate) mod preprocessing;
