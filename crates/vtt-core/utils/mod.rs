//! Utility functions and shared types for VTT-RS core
//!
//! Contains functionality shared by the parser, settings grammars, and the
//! cue-text pipeline: input normalization, numeric value grammars, error types,
//! and hash map helpers.
//!
//! # Example
//!
//! ```rust
//! use vtt_core::utils::{parse_percentage, parse_number};
//!
//! assert_eq!(parse_percentage("37.5%")?, 37.5);
//! assert_eq!(parse_number("-2", true)?, -2.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod errors;
pub mod hashers;
pub mod normalization;

pub use errors::CoreError;
pub use hashers::{create_hash_map, create_hash_map_with_capacity, FastHashMap};
pub use normalization::{is_normalized, normalize_input};

/// Parse a decimal number made of ASCII digits and at most one `.`
///
/// When `allow_sign` is set a single leading `-` is accepted. Exponents,
/// `+` signs, `inf` and `NaN` are rejected.
///
/// # Errors
///
/// Returns [`CoreError::InvalidNumeric`] if the text is empty, has no digit,
/// contains any other character, or has more than one decimal point.
pub fn parse_number(text: &str, allow_sign: bool) -> Result<f64, CoreError> {
    let body = if allow_sign {
        text.strip_prefix('-').unwrap_or(text)
    } else {
        text
    };

    if !body.bytes().any(|b| b.is_ascii_digit()) {
        return Err(CoreError::invalid_numeric(text, "expected digits"));
    }

    if !body.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(CoreError::invalid_numeric(text, "unexpected character"));
    }

    if body.bytes().filter(|&b| b == b'.').count() > 1 {
        return Err(CoreError::invalid_numeric(
            text,
            "more than one decimal point",
        ));
    }

    text.parse::<f64>()
        .map_err(|e| CoreError::invalid_numeric(text, &e.to_string()))
}

/// Parse a percentage such as `50%` or `12.5%` into its numeric value
///
/// # Errors
///
/// Returns [`CoreError::InvalidNumeric`] if the `%` suffix is missing or the
/// number in front of it is not a plain unsigned decimal.
pub fn parse_percentage(text: &str) -> Result<f64, CoreError> {
    let number = text
        .strip_suffix('%')
        .ok_or_else(|| CoreError::invalid_numeric(text, "missing '%' suffix"))?;

    parse_number(number, false)
}

/// Parse a percentage and require it to lie within `0..=100`
///
/// # Errors
///
/// Returns [`CoreError::InvalidNumeric`] for malformed or out-of-range values.
pub fn parse_bounded_percentage(text: &str) -> Result<f64, CoreError> {
    let value = parse_percentage(text)?;
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(CoreError::invalid_numeric(text, "must be between 0% and 100%"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_accepts_plain_decimals() {
        assert_eq!(parse_number("5", false), Ok(5.0));
        assert_eq!(parse_number("12.25", false), Ok(12.25));
        assert_eq!(parse_number("0.", false), Ok(0.0));
        assert_eq!(parse_number(".5", false), Ok(0.5));
    }

    #[test]
    fn parse_number_sign_handling() {
        assert_eq!(parse_number("-3", true), Ok(-3.0));
        assert!(parse_number("-3", false).is_err());
        assert!(parse_number("+3", true).is_err());
        assert!(parse_number("--3", true).is_err());
    }

    #[test]
    fn parse_number_rejects_garbage() {
        assert!(parse_number("", false).is_err());
        assert!(parse_number(".", false).is_err());
        assert!(parse_number("1e3", false).is_err());
        assert!(parse_number("inf", false).is_err());
        assert!(parse_number("NaN", false).is_err());
        assert!(parse_number("1.2.3", false).is_err());
        assert!(parse_number("50abc", false).is_err());
    }

    #[test]
    fn percentages() {
        assert_eq!(parse_percentage("50%"), Ok(50.0));
        assert_eq!(parse_percentage("150%"), Ok(150.0));
        assert!(parse_percentage("50").is_err());
        assert!(parse_percentage("%").is_err());
        assert!(parse_percentage("-5%").is_err());
    }

    #[test]
    fn bounded_percentages() {
        assert_eq!(parse_bounded_percentage("0%"), Ok(0.0));
        assert_eq!(parse_bounded_percentage("100%"), Ok(100.0));
        assert!(matches!(
            parse_bounded_percentage("150%"),
            Err(CoreError::InvalidNumeric(_))
        ));
    }
}
