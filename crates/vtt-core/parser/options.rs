//! Per-call parser configuration
//!
//! There are no global settings. Every parse call receives its own
//! [`ParserOptions`]; the default is strict conformance with markup trees
//! built and stylesheets collected.

use core::{fmt, str::FromStr};

use crate::utils::CoreError;

/// How the parser reacts to an invalid signature
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::ConformanceMode;
///
/// assert_eq!("w3c".parse::<ConformanceMode>().unwrap(), ConformanceMode::Strict);
/// assert_eq!("Best-Effort".parse::<ConformanceMode>().unwrap(), ConformanceMode::BestEffort);
/// assert!("lenient".parse::<ConformanceMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ConformanceMode {
    /// Stop after signature validation when the signature is invalid
    #[default]
    Strict,
    /// Keep parsing whatever follows a bad signature
    BestEffort,
}

impl ConformanceMode {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::BestEffort => "best-effort",
        }
    }
}

impl fmt::Display for ConformanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConformanceMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "w3c" => Ok(Self::Strict),
            "best-effort" | "best_effort" => Ok(Self::BestEffort),
            other => Err(CoreError::config(format!(
                "unknown conformance mode '{other}' (expected 'strict' or 'best-effort')"
            ))),
        }
    }
}

/// What happens to STYLE blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StylesheetMode {
    /// Keep the CSS text of each STYLE block
    #[default]
    Collect,
    /// Drop STYLE blocks silently
    Ignore,
}

impl FromStr for StylesheetMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "collect" => Ok(Self::Collect),
            "ignore" => Ok(Self::Ignore),
            other => Err(CoreError::config(format!(
                "unknown stylesheet mode '{other}' (expected 'collect' or 'ignore')"
            ))),
        }
    }
}

/// Parser options
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::{ConformanceMode, ParserOptions, StylesheetMode};
///
/// let options = ParserOptions::default()
///     .with_mode(ConformanceMode::BestEffort)
///     .with_cue_text_nodes(false)
///     .with_stylesheets(StylesheetMode::Ignore);
///
/// assert!(!options.is_strict());
/// assert!(!options.cue_text_nodes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Signature failure handling
    pub mode: ConformanceMode,

    /// Build a markup tree for every cue payload
    pub cue_text_nodes: bool,

    /// STYLE block handling
    pub stylesheets: StylesheetMode,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            mode: ConformanceMode::Strict,
            cue_text_nodes: true,
            stylesheets: StylesheetMode::Collect,
        }
    }
}

impl ParserOptions {
    /// Set conformance mode
    #[must_use]
    pub const fn with_mode(mut self, mode: ConformanceMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable markup tree generation
    #[must_use]
    pub const fn with_cue_text_nodes(mut self, enabled: bool) -> Self {
        self.cue_text_nodes = enabled;
        self
    }

    /// Set STYLE block handling
    #[must_use]
    pub const fn with_stylesheets(mut self, mode: StylesheetMode) -> Self {
        self.stylesheets = mode;
        self
    }

    /// Check for strict conformance
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        matches!(self.mode, ConformanceMode::Strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ParserOptions::default();
        assert!(options.is_strict());
        assert!(options.cue_text_nodes);
        assert_eq!(options.stylesheets, StylesheetMode::Collect);
    }

    #[test]
    fn mode_names() {
        for (text, mode) in [
            ("strict", ConformanceMode::Strict),
            ("W3C", ConformanceMode::Strict),
            ("best-effort", ConformanceMode::BestEffort),
            (" best_effort ", ConformanceMode::BestEffort),
        ] {
            assert_eq!(text.parse::<ConformanceMode>().ok(), Some(mode));
        }
        assert_eq!(ConformanceMode::BestEffort.to_string(), "best-effort");
    }

    #[test]
    fn unknown_mode_is_config_error() {
        let error = "loose".parse::<ConformanceMode>().unwrap_err();
        assert!(matches!(error, CoreError::Config(_)));
        assert!(error.to_string().contains("loose"));
    }

    #[test]
    fn stylesheet_mode_names() {
        assert_eq!("Ignore".parse::<StylesheetMode>().ok(), Some(StylesheetMode::Ignore));
        assert!("parse".parse::<StylesheetMode>().is_err());
    }
}
