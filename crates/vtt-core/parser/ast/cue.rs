//! Cue AST node and its display settings
//!
//! A cue is built by the block collector when a timing line is recognized,
//! mutated by the cue settings grammar and cue text builder for the same
//! block, and never changed after it is returned in a parse result.

use alloc::sync::Arc;
use core::fmt;

use super::Region;
use crate::parser::cue_text::{build_dom, CueTextTree, DomNode};

/// Writing direction set by the `vertical` setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum WritingDirection {
    /// Horizontal text, no `vertical` setting
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    Horizontal,

    /// Vertical text growing to the left (`vertical:rl`)
    #[cfg_attr(feature = "serde", serde(rename = "rl"))]
    VerticalGrowingLeft,

    /// Vertical text growing to the right (`vertical:lr`)
    #[cfg_attr(feature = "serde", serde(rename = "lr"))]
    VerticalGrowingRight,
}

impl WritingDirection {
    /// Parse a `vertical` setting value
    #[must_use]
    pub fn from_setting(value: &str) -> Option<Self> {
        match value {
            "rl" => Some(Self::VerticalGrowingLeft),
            "lr" => Some(Self::VerticalGrowingRight),
            _ => None,
        }
    }

    /// Keyword as written in cue settings, `none` for horizontal
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "none",
            Self::VerticalGrowingLeft => "rl",
            Self::VerticalGrowingRight => "lr",
        }
    }

    /// Check if text runs vertically
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        !matches!(self, Self::Horizontal)
    }
}

/// Line position of a cue
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CueLine {
    /// Renderer picks the line
    #[default]
    Auto,

    /// Line number or percentage, depending on `snap_to_lines`
    Value(f64),
}

/// Alignment of the cue box along the line axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineAlign {
    /// Box starts at the line position
    Start,
    /// Box is centered on the line position
    Center,
    /// Box ends at the line position
    End,
}

impl LineAlign {
    /// Parse the alignment suffix of a `line` setting
    #[must_use]
    pub fn from_setting(value: &str) -> Option<Self> {
        match value {
            "start" => Some(Self::Start),
            "center" => Some(Self::Center),
            "end" => Some(Self::End),
            _ => None,
        }
    }
}

/// Position of a cue box along the text axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CuePosition {
    /// Derived from the text alignment
    #[default]
    Auto,

    /// Percentage of the video width or height
    Percent(f64),
}

/// Alignment of the cue box relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PositionAlign {
    /// Box starts at the position
    LineLeft,
    /// Box is centered on the position
    Center,
    /// Box ends at the position
    LineRight,
    /// Derived from the text alignment
    #[default]
    Auto,
}

impl PositionAlign {
    /// Parse the alignment suffix of a `position` setting
    #[must_use]
    pub fn from_setting(value: &str) -> Option<Self> {
        match value {
            "line-left" => Some(Self::LineLeft),
            "center" => Some(Self::Center),
            "line-right" => Some(Self::LineRight),
            _ => None,
        }
    }
}

/// Alignment of text within the cue box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextAlign {
    /// Start of the line in the text direction
    Start,
    /// Centered
    #[default]
    Center,
    /// End of the line in the text direction
    End,
    /// Left edge regardless of direction
    Left,
    /// Right edge regardless of direction
    Right,
}

impl TextAlign {
    /// Parse an `align` setting value
    #[must_use]
    pub fn from_setting(value: &str) -> Option<Self> {
        match value {
            "start" => Some(Self::Start),
            "center" => Some(Self::Center),
            "end" => Some(Self::End),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Timed unit of text with layout settings
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::ast::{Cue, CueLine, TextAlign};
///
/// let cue = Cue::default();
/// assert_eq!(cue.line, CueLine::Auto);
/// assert_eq!(cue.align, TextAlign::Center);
/// assert_eq!(cue.size, 100.0);
/// assert!(cue.snap_to_lines);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Cue {
    /// Identifier line preceding the timing line
    pub id: Option<String>,

    /// Start time in seconds
    pub start_time: f64,

    /// End time in seconds
    pub end_time: f64,

    /// Pause playback when the cue ends
    pub pause_on_exit: bool,

    /// Writing direction
    pub vertical: WritingDirection,

    /// Whether `line` counts lines rather than percent
    pub snap_to_lines: bool,

    /// Line position
    pub line: CueLine,

    /// Line alignment, `None` when not set
    pub line_align: Option<LineAlign>,

    /// Text-axis position
    pub position: CuePosition,

    /// Position alignment
    pub position_align: PositionAlign,

    /// Box size in percent
    pub size: f64,

    /// Text alignment
    pub align: TextAlign,

    /// Raw payload lines joined with LF
    pub text: String,

    /// Parsed markup tree, absent when tree generation is disabled
    pub tree: Option<CueTextTree>,

    /// Region the cue is laid out in
    pub region: Option<Arc<Region>>,
}

impl Default for Cue {
    fn default() -> Self {
        Self {
            id: None,
            start_time: 0.0,
            end_time: 0.0,
            pause_on_exit: false,
            vertical: WritingDirection::Horizontal,
            snap_to_lines: true,
            line: CueLine::Auto,
            line_align: None,
            position: CuePosition::Auto,
            position_align: PositionAlign::Auto,
            size: 100.0,
            align: TextAlign::Center,
            text: String::new(),
            tree: None,
            region: None,
        }
    }
}

impl Cue {
    /// Create cue with default settings and the given timing
    #[must_use]
    pub fn with_timing(start_time: f64, end_time: f64) -> Self {
        Self {
            start_time,
            end_time,
            ..Self::default()
        }
    }

    /// Time between start and end, negative for reversed timings
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Check that start time does not exceed end time
    #[must_use]
    pub fn has_valid_timing(&self) -> bool {
        self.start_time <= self.end_time
    }

    /// Identifier of the region the cue belongs to
    #[must_use]
    pub fn region_id(&self) -> Option<&str> {
        self.region.as_deref().map(|region| region.id.as_str())
    }

    /// Project the markup tree into a conceptual DOM fragment
    #[must_use]
    pub fn dom(&self) -> Option<DomNode> {
        self.tree.as_ref().map(build_dom)
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = &self.id {
            writeln!(f, "{id}")?;
        }
        write!(
            f,
            "{} --> {}",
            format_seconds(self.start_time),
            format_seconds(self.end_time)
        )?;
        if !self.text.is_empty() {
            write!(f, "\n{}", self.text)?;
        }
        Ok(())
    }
}

/// Render seconds as `HH:MM:SS.mmm`
#[must_use]
pub fn format_seconds(seconds: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_millis = (seconds.max(0.0) * 1000.0).round() as u64;
    let millis = total_millis % 1000;
    let total_seconds = total_millis / 1000;
    format!(
        "{:02}:{:02}:{:02}.{millis:03}",
        total_seconds / 3600,
        (total_seconds / 60) % 60,
        total_seconds % 60
    )
}
