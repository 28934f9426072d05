//! Diagnostics model for WebVTT parsing
//!
//! Content problems are reported as [`Diagnostic`] values collected alongside
//! the parse result instead of aborting the parse.
//!
//! # Error Philosophy
//!
//! - Every malformed construct has a defined recovery
//! - Diagnostics are never deduplicated and keep discovery order
//! - Presentation-level filtering is left to callers
//!
//! # Module Organization
//!
//! - `code` - Numeric codes and their categories
//! - `diagnostic` - Diagnostic record and severity
//! - `format` - Console rendering of diagnostic lists

pub mod code;
pub mod diagnostic;
pub mod format;

pub use code::{DiagnosticCategory, DiagnosticCode};
pub use diagnostic::{Diagnostic, DiagnosticSeverity};
pub use format::{format_diagnostics, FormatOptions};
