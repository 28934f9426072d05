//! Stylesheet AST node
//!
//! STYLE blocks are captured verbatim. The CSS is never parsed.

/// Opaque CSS text from one STYLE block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Stylesheet {
    /// Lines following the `STYLE` line joined with LF
    pub css_text: String,
}

impl Stylesheet {
    /// Wrap CSS text
    #[must_use]
    pub fn new(css_text: impl Into<String>) -> Self {
        Self {
            css_text: css_text.into(),
        }
    }

    /// Check if the block had no CSS lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.css_text.is_empty()
    }
}
