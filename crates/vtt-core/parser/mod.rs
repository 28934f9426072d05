//! WebVTT parser module
//!
//! Turns a WebVTT document into cues, regions, stylesheets and an ordered
//! list of diagnostics. Parsing never fails: every malformed construct is
//! either skipped or reported, and the only early stop is an invalid
//! signature under [`ConformanceMode::Strict`].
//!
//! # Pipeline
//!
//! 1. Normalize line endings and NUL characters
//! 2. Validate the `WEBVTT` signature
//! 3. Consume the signature line and the optional header block
//! 4. Collect blocks until end of input, classifying each as a cue, region,
//!    stylesheet or nothing
//!
//! # Example
//!
//! ```rust
//! use vtt_core::parser::parse;
//!
//! let result = parse(
//!     "WEBVTT\n\nREGION\nid:test width:50%\n\n00:01.000 --> 00:02.000 region:test\n<v Bob>Hello",
//! );
//!
//! let cue = &result.cues()[0];
//! assert_eq!(cue.region_id(), Some("test"));
//! assert_eq!(result.regions()[0].width, 50.0);
//! assert!(result.diagnostics().is_empty());
//! ```

use crate::utils::normalize_input;
use log::debug;

pub mod ast;
pub mod block;
pub mod cue_text;
pub mod errors;
mod main;
pub mod options;
mod result;
pub mod settings;
pub mod signature;
pub mod timestamp;

pub use ast::{Cue, Metadata, Region, Stylesheet};
pub use errors::{
    format_diagnostics, Diagnostic, DiagnosticCategory, DiagnosticCode, DiagnosticSeverity,
    FormatOptions,
};
pub use options::{ConformanceMode, ParserOptions, StylesheetMode};
pub use result::{ParseParts, ParseResult};

use main::Parser;

/// Parse a WebVTT document with default options
///
/// Defaults are strict conformance, markup trees built for every cue, and
/// stylesheets collected.
#[must_use]
pub fn parse(input: &str) -> ParseResult {
    parse_with_options(input, &ParserOptions::default())
}

/// Parse a WebVTT document with explicit options
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::{parse_with_options, ConformanceMode, ParserOptions};
///
/// let options = ParserOptions::default().with_mode(ConformanceMode::BestEffort);
/// let result = parse_with_options("WEBVTX\n\n00:01.000 --> 00:02.000\nStill here", &options);
///
/// assert!(result.has_errors());
/// assert_eq!(result.cues().len(), 1);
/// ```
#[must_use]
pub fn parse_with_options(input: &str, options: &ParserOptions) -> ParseResult {
    let normalized = normalize_input(input);
    debug!(
        "parsing {} bytes ({:?} mode)",
        normalized.len(),
        options.mode
    );
    Parser::new(&normalized, *options).parse()
}
