//! Token definitions for cue text tokenization
//!
//! Cue payloads tokenize into a flat stream of text runs, start tags, end
//! tags and timestamp tags. Tokens own their text since class names and
//! annotations are assembled from pieces of a tag.
//!
//! # Example
//!
//! ```rust
//! use vtt_core::tokenizer::{CueTextToken, StartTag};
//!
//! let token = CueTextToken::StartTag(StartTag {
//!     name: "v".to_string(),
//!     classes: vec!["loud".to_string()],
//!     annotation: Some("Esme".to_string()),
//! });
//! assert_eq!(token.tag_name(), Some("v"));
//! ```

use core::fmt;

/// Start tag with its class list and optional annotation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartTag {
    /// Tag name such as `b`, `v` or `lang`
    pub name: String,

    /// Class names in source order
    pub classes: Vec<String>,

    /// Trimmed annotation text following the name and classes
    pub annotation: Option<String>,
}

impl StartTag {
    /// Create start tag without classes or annotation
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Token produced by the cue text tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CueTextToken {
    /// Run of plain text between tags
    Text(String),

    /// Opening tag
    StartTag(StartTag),

    /// Closing tag carrying its raw name
    EndTag(String),

    /// Raw contents of a timestamp tag such as `<00:01.500>`
    Timestamp(String),
}

impl CueTextToken {
    /// Tag name for start and end tags
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::StartTag(tag) => Some(&tag.name),
            Self::EndTag(name) => Some(name),
            Self::Text(_) | Self::Timestamp(_) => None,
        }
    }

    /// Check if token is a text run
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl fmt::Display for CueTextToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::StartTag(tag) => {
                write!(f, "<{}", tag.name)?;
                for class in &tag.classes {
                    write!(f, ".{class}")?;
                }
                if let Some(annotation) = &tag.annotation {
                    write!(f, " {annotation}")?;
                }
                f.write_str(">")
            }
            Self::EndTag(name) => write!(f, "</{name}>"),
            Self::Timestamp(raw) => write!(f, "<{raw}>"),
        }
    }
}
