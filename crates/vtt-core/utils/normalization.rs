//! Input normalization applied before any WebVTT parsing step
//!
//! The parser only ever sees LF line endings and never sees NUL characters.
//!
//! # Examples
//!
//! ```rust
//! use vtt_core::utils::normalize_input;
//!
//! let input = "Line 1\r\nLine 2\rLine 3\0";
//! assert_eq!(normalize_input(input), "Line 1\nLine 2\nLine 3\u{FFFD}");
//! ```

/// Normalize raw subtitle text for parsing
///
/// Replaces every U+0000 NULL with U+FFFD REPLACEMENT CHARACTER, collapses each
/// CR LF pair into a single LF, and turns every remaining CR into LF. Nothing
/// else is touched.
#[must_use]
pub fn normalize_input(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\0' => output.push('\u{FFFD}'),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                output.push('\n');
            }
            other => output.push(other),
        }
    }

    output
}

/// Check whether text is already in normalized form
#[must_use]
pub fn is_normalized(input: &str) -> bool {
    !input.contains(['\0', '\r'])
}
