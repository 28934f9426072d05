//! Diagnostic records for format violations found while parsing
//!
//! Diagnostics are immutable values accumulated in discovery order. They
//! never stop parsing on their own; the only hard stop is a signature
//! failure under strict conformance.

use core::fmt;

use super::code::{DiagnosticCategory, DiagnosticCode};

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiagnosticSeverity {
    /// Violation of the format
    Error,

    /// Suspicious but tolerated content
    Warning,

    /// Informational note
    Info,
}

impl DiagnosticSeverity {
    /// Lowercase name used in serialized output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem found in the input
///
/// `line` and `column` are 1-based. A line of 0 marks a file-level
/// diagnostic that is not tied to a position.
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::{Diagnostic, DiagnosticCode};
///
/// let diagnostic = Diagnostic::error(DiagnosticCode::TimestampInvalid, "Invalid timestamp format")
///     .with_location(3, 1)
///     .with_raw("00:00 --> 00:01.000");
///
/// assert_eq!(
///     diagnostic.to_string(),
///     "[ERROR] Line 3:1 - Invalid timestamp format (Code: 2000)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    /// How serious the problem is
    pub severity: DiagnosticSeverity,

    /// Numeric code identifying the kind of problem
    pub code: DiagnosticCode,

    /// Human-readable message
    pub message: String,

    /// Line number (1-based, 0 for file-level)
    pub line: usize,

    /// Column number (1-based, 0 when unknown)
    pub column: usize,

    /// Offending source text
    pub raw: String,
}

impl Diagnostic {
    /// Create a file-level diagnostic with no raw context
    #[must_use]
    pub fn new(
        severity: DiagnosticSeverity,
        code: DiagnosticCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            line: 0,
            column: 0,
            raw: String::new(),
        }
    }

    /// Create error-level diagnostic
    #[must_use]
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Error, code, message)
    }

    /// Create warning-level diagnostic
    #[must_use]
    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Warning, code, message)
    }

    /// Create info-level diagnostic
    #[must_use]
    pub fn info(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Info, code, message)
    }

    /// Attach a 1-based source position
    #[must_use]
    pub const fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// Attach the offending source text
    #[must_use]
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = raw.into();
        self
    }

    /// Whether this diagnostic has error severity
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, DiagnosticSeverity::Error)
    }

    /// Whether this diagnostic is not tied to a source line
    #[must_use]
    pub const fn is_file_level(&self) -> bool {
        self.line == 0
    }

    /// Stage the diagnostic was produced by
    #[must_use]
    pub const fn category(&self) -> DiagnosticCategory {
        self.code.category()
    }

    /// Format diagnostic as a single line for console output
    #[must_use]
    pub fn format_for_display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = self.severity.as_str().to_ascii_uppercase();
        if self.is_file_level() {
            write!(
                f,
                "[{severity}] File-level - {} (Code: {})",
                self.message, self.code
            )
        } else {
            write!(
                f,
                "[{severity}] Line {}:{} - {} (Code: {})",
                self.line, self.column, self.message, self.code
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", DiagnosticSeverity::Error), "error");
        assert_eq!(format!("{}", DiagnosticSeverity::Warning), "warning");
        assert_eq!(format!("{}", DiagnosticSeverity::Info), "info");
    }

    #[test]
    fn new_diagnostic_is_file_level() {
        let diagnostic = Diagnostic::warning(DiagnosticCode::BlockUnexpected, "Cue in header");

        assert_eq!(diagnostic.severity, DiagnosticSeverity::Warning);
        assert_eq!(diagnostic.line, 0);
        assert_eq!(diagnostic.column, 0);
        assert!(diagnostic.raw.is_empty());
        assert!(diagnostic.is_file_level());
        assert!(!diagnostic.is_error());
        assert_eq!(diagnostic.category(), DiagnosticCategory::Block);
    }

    #[test]
    fn builder_sets_location_and_raw() {
        let diagnostic = Diagnostic::error(DiagnosticCode::SignatureInvalid, "Bad signature")
            .with_location(1, 7)
            .with_raw("X");

        assert_eq!(diagnostic.line, 1);
        assert_eq!(diagnostic.column, 7);
        assert_eq!(diagnostic.raw, "X");
        assert!(diagnostic.is_error());
    }

    #[test]
    fn display_with_location() {
        let diagnostic = Diagnostic::error(DiagnosticCode::CueTimingInvalidOrder, "Backwards")
            .with_location(4, 1);
        assert_eq!(
            diagnostic.format_for_display(),
            "[ERROR] Line 4:1 - Backwards (Code: 2001)"
        );
    }

    #[test]
    fn display_file_level() {
        let diagnostic = Diagnostic::info(DiagnosticCode::StyleIgnored, "Dropped");
        assert_eq!(
            diagnostic.to_string(),
            "[INFO] File-level - Dropped (Code: 3001)"
        );
    }
}
