//! Region AST node
//!
//! Regions are built fresh for each REGION block and never mutated
//! afterwards. Cues refer to them through shared references.

use core::fmt;

/// Anchor point in percent of a box's width and height
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Anchor {
    /// Horizontal offset in percent
    pub x: f64,
    /// Vertical offset in percent
    pub y: f64,
}

impl Anchor {
    /// Create anchor from percentages
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}

/// Scrolling behaviour of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScrollMode {
    /// Cues appear in place
    #[default]
    None,
    /// Cues push earlier lines upwards
    Up,
}

impl fmt::Display for ScrollMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Up => f.write_str("up"),
        }
    }
}

/// Named viewport-relative layout area
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::ast::{Anchor, Region, ScrollMode};
///
/// let region = Region::default();
/// assert_eq!(region.width, 100.0);
/// assert_eq!(region.lines, 3);
/// assert_eq!(region.region_anchor, Anchor::new(0.0, 100.0));
/// assert_eq!(region.scroll, ScrollMode::None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Region {
    /// Identifier cues use in their `region` setting
    pub id: String,

    /// Width in percent of the viewport
    pub width: f64,

    /// Height in lines
    pub lines: u32,

    /// Point of the region pinned to the viewport anchor
    pub region_anchor: Anchor,

    /// Point of the viewport the region anchor is pinned to
    pub viewport_anchor: Anchor,

    /// Scrolling behaviour
    pub scroll: ScrollMode,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            id: String::new(),
            width: 100.0,
            lines: 3,
            region_anchor: Anchor::default(),
            viewport_anchor: Anchor::default(),
            scroll: ScrollMode::None,
        }
    }
}

impl Region {
    /// Create region with default layout and the given identifier
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_id_keeps_defaults() {
        let region = Region::with_id("fred");
        assert_eq!(region.id, "fred");
        assert_eq!(region.viewport_anchor, Anchor::new(0.0, 100.0));
        assert_eq!(region.lines, 3);
    }

    #[test]
    fn scroll_display() {
        assert_eq!(ScrollMode::Up.to_string(), "up");
        assert_eq!(ScrollMode::None.to_string(), "none");
    }
}
