//! Human-readable rendering of diagnostic lists

use super::Diagnostic;

/// Options for [`format_diagnostics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Maximum number of diagnostics to print; `None` or `Some(0)` prints all
    pub max: Option<usize>,
}

impl FormatOptions {
    /// Limit output to the first `max` diagnostics
    #[must_use]
    pub const fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }
}

/// Render diagnostics one per line
///
/// An empty list renders as `No errors or warnings found.`. When the list is
/// truncated a final `... and K more.` line reports how many were left out.
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::{format_diagnostics, parse, FormatOptions};
///
/// let result = parse("WEBVTT\n\n00:02.000 --> 00:01.000\nBackwards");
/// let report = format_diagnostics(result.diagnostics(), &FormatOptions::default());
/// assert_eq!(
///     report,
///     "[ERROR] Line 3:1 - Start time must be less than or equal to end time (Code: 2001)"
/// );
/// ```
#[must_use]
pub fn format_diagnostics(diagnostics: &[Diagnostic], options: &FormatOptions) -> String {
    if diagnostics.is_empty() {
        return "No errors or warnings found.".to_string();
    }

    let shown = match options.max {
        Some(max) if max > 0 => max.min(diagnostics.len()),
        _ => diagnostics.len(),
    };
    let hidden = diagnostics.len() - shown;

    let mut output = diagnostics[..shown]
        .iter()
        .map(Diagnostic::format_for_display)
        .collect::<Vec<_>>()
        .join("\n");

    if hidden > 0 {
        output.push_str(&format!("\n... and {hidden} more."));
    }

    output
}
