//! Classified blocks produced by the block collector
//!
//! A block is a maximal run of non-blank lines. It classifies as a cue, a
//! region definition, a stylesheet, or none of those.

use super::{Cue, Region, Stylesheet};

/// Block kind discriminant for routing and logging
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::ast::{Block, BlockKind, Stylesheet};
///
/// let block = Block::Style(Stylesheet::new("::cue { color: red }"));
/// assert_eq!(block.kind(), BlockKind::Style);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Timed cue
    Cue,
    /// REGION definition
    Region,
    /// STYLE sheet
    Style,
    /// Anything else, including an empty block
    None,
}

impl BlockKind {
    /// Lowercase name for log output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cue => "cue",
            Self::Region => "region",
            Self::Style => "style",
            Self::None => "none",
        }
    }
}

/// Block content after classification
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Cue with timing, settings, payload and markup tree
    Cue(Cue),

    /// Region built from REGION settings
    Region(Region),

    /// Opaque CSS from a STYLE block
    Style(Stylesheet),

    /// Unclassified lines, empty for a block with no lines
    Other(Vec<String>),
}

impl Block {
    /// Get the kind of this block
    #[must_use]
    pub const fn kind(&self) -> BlockKind {
        match self {
            Self::Cue(_) => BlockKind::Cue,
            Self::Region(_) => BlockKind::Region,
            Self::Style(_) => BlockKind::Style,
            Self::Other(_) => BlockKind::None,
        }
    }

    /// Check if the block had no lines at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Other(lines) if lines.is_empty())
    }
}
