//! Conversion options.

/// How the subtree to render is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RootMode {
    /// First `<section>`, else first `<body>`, else the whole document.
    #[default]
    Fallback,
    /// Only a `<section>` is accepted. Without one the conversion yields
    /// [`NO_SECTION_MESSAGE`](crate::NO_SECTION_MESSAGE).
    Strict,
}

/// What to do with a table that has no discoverable header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HeaderlessTables {
    /// Emit the body rows only, without header or alignment lines.
    #[default]
    Passthrough,
    /// Emit an empty header row and a `---` alignment row sized to the widest
    /// body row.
    Synthesize,
}

/// Options controlling a single conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ConversionOptions {
    /// Root selection policy.
    pub root_mode: RootMode,
    /// Rendering policy for tables without a header row.
    pub headerless_tables: HeaderlessTables,
}

impl ConversionOptions {
    /// Set the root selection policy.
    #[must_use]
    pub const fn with_root_mode(mut self, root_mode: RootMode) -> Self {
        self.root_mode = root_mode;
        self
    }

    /// Set the headerless table policy.
    #[must_use]
    pub const fn with_headerless_tables(mut self, headerless_tables: HeaderlessTables) -> Self {
        self.headerless_tables = headerless_tables;
        self
    }
}
