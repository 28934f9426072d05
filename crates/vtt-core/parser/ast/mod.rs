//! AST definitions for WebVTT files
//!
//! Owned value types for everything a parse produces: cues with their
//! layout settings, regions, stylesheets, file metadata and the classified
//! blocks the collector hands to the orchestrator.
//!
//! # Thread Safety
//!
//! All nodes are immutable after parsing and implement `Send + Sync`.
//! Regions are shared between cues through `Arc`.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use vtt_core::parser::ast::{Cue, Region};
//!
//! let region = Arc::new(Region::with_id("speaker"));
//! let cue = Cue {
//!     text: "Hello".to_string(),
//!     region: Some(Arc::clone(&region)),
//!     ..Cue::with_timing(0.0, 1.5)
//! };
//! assert_eq!(cue.region_id(), Some("speaker"));
//! ```

mod block;
mod cue;
mod metadata;
mod region;
mod stylesheet;

pub use block::{Block, BlockKind};
pub use cue::{
    format_seconds, Cue, CueLine, CuePosition, LineAlign, PositionAlign, TextAlign,
    WritingDirection,
};
pub use metadata::Metadata;
pub use region::{Anchor, Region, ScrollMode};
pub use stylesheet::Stylesheet;
