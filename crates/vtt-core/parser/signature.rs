//! File signature validation
//!
//! A WebVTT file starts with the literal `WEBVTT`, optionally followed by a
//! space, tab or line feed and free text up to the end of the line.

use super::errors::{Diagnostic, DiagnosticCode};

/// Literal every WebVTT file must start with
pub const SIGNATURE: &str = "WEBVTT";

/// Validate the signature at the start of normalized input
///
/// Returns at most one diagnostic. Validation stops at the first problem.
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::{signature::validate_signature, DiagnosticCode};
///
/// assert!(validate_signature("WEBVTT - Movie subtitles\n").is_empty());
///
/// let diagnostics = validate_signature("WEBVTTX");
/// assert_eq!(diagnostics[0].code, DiagnosticCode::SignatureInvalid);
/// assert_eq!(diagnostics[0].column, 7);
/// ```
#[must_use]
pub fn validate_signature(input: &str) -> Vec<Diagnostic> {
    let mut chars = input.chars();
    let prefix: String = chars.by_ref().take(SIGNATURE.chars().count()).collect();

    if prefix.chars().count() < SIGNATURE.len() {
        return vec![
            Diagnostic::error(DiagnosticCode::SignatureTooShort, "File too short to be WebVTT")
                .with_location(1, 1)
                .with_raw(input),
        ];
    }

    if prefix != SIGNATURE {
        return vec![
            Diagnostic::error(DiagnosticCode::SignatureInvalid, "Invalid WebVTT signature")
                .with_location(1, 1)
                .with_raw(prefix),
        ];
    }

    match chars.next() {
        Some(' ' | '\t' | '\n') | None => Vec::new(),
        Some(other) => vec![Diagnostic::error(
            DiagnosticCode::SignatureInvalid,
            "Invalid character after WEBVTT signature",
        )
        .with_location(1, SIGNATURE.len() + 1)
        .with_raw(other.to_string())],
    }
}

/// Text following the signature on the first line, trimmed
///
/// Returns `None` when the first line has nothing after the signature or does
/// not start with it.
#[must_use]
pub fn signature_text(first_line: &str) -> Option<String> {
    let text = first_line.strip_prefix(SIGNATURE)?.trim();
    (!text.is_empty()).then(|| text.to_string())
}
