//! Block-level renderers.

pub(crate) mod code;
pub(crate) mod heading;
pub(crate) mod table;
