//! # VTT-RS Core
//!
//! Conformance-oriented WebVTT subtitle parser and validator. Turns a WebVTT
//! document into timed cues with their layout settings, regions, opaque
//! stylesheets and an ordered list of diagnostics describing every format
//! violation found along the way.
//!
//! ## Features
//!
//! - **Never fails on content**: malformed input yields diagnostics, not errors
//! - **Strict or best-effort**: stop at a bad signature, or keep going
//! - **Cue markup trees**: `<c>`, `<i>`, `<b>`, `<u>`, `<ruby>`, `<rt>`, `<v>`,
//!   `<lang>` and inline timestamps, with recovery for bad nesting
//! - **Conceptual DOM**: renderer-agnostic projection of cue markup
//! - **Thread-safe**: no global state; results are `Send + Sync`
//!
//! ## Quick Start
//!
//! ```rust
//! use vtt_core::{format_diagnostics, parse, FormatOptions};
//!
//! let text = "WEBVTT - Example
//!
//! STYLE
//! ::cue { color: yellow }
//!
//! intro
//! 00:00.000 --> 00:02.500 align:start
//! <v Narrator>Hello <b>world</b>
//! ";
//!
//! let result = parse(text);
//! assert_eq!(result.cues().len(), 1);
//! assert_eq!(result.stylesheets().len(), 1);
//!
//! let cue = &result.cues()[0];
//! assert_eq!(cue.id.as_deref(), Some("intro"));
//! assert_eq!(cue.dom().map(|dom| dom.text_content()), Some("Hello world".to_string()));
//!
//! println!("{}", format_diagnostics(result.diagnostics(), &FormatOptions::default()));
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: parse start and finish at
//! `debug`, each classified block at `trace`. No logger is installed.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod parser;
pub mod tokenizer;
pub mod utils;

pub use parser::{
    format_diagnostics, parse, parse_with_options, ConformanceMode, Cue, Diagnostic,
    DiagnosticCode, DiagnosticSeverity, FormatOptions, ParseResult, ParserOptions, Region,
    StylesheetMode,
};
pub use tokenizer::{CueTextToken, CueTextTokenizer};
pub use utils::CoreError;

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for core operations, using the crate's unified `CoreError`.
///
/// Only API-level helpers return it; [`parse`] always produces a
/// [`ParseResult`].
///
/// # Examples
///
/// ```rust
/// use vtt_core::{parser::timestamp::try_parse_timestamp, Result};
///
/// fn cue_length(start: &str, end: &str) -> Result<f64> {
///     Ok(try_parse_timestamp(end)? - try_parse_timestamp(start)?)
/// }
///
/// assert_eq!(cue_length("00:01.000", "00:03.500").ok(), Some(2.5));
/// assert!(cue_length("1:00", "00:03.500").is_err());
/// ```
pub type Result<T> = core::result::Result<T, CoreError>;
