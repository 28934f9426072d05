//! Format validation error utilities for VTT-RS
//!
//! Specialized constructors for the value formats the settings and timestamp
//! grammars deal with, keeping the message layout consistent.

use super::CoreError;
use core::fmt;

/// Create numeric parsing error with value and reason
///
/// # Examples
///
/// ```rust
/// use vtt_core::utils::errors::{invalid_numeric, CoreError};
///
/// let error = invalid_numeric("150%", "must be between 0 and 100");
/// assert!(matches!(error, CoreError::InvalidNumeric(_)));
/// ```
pub fn invalid_numeric<T: fmt::Display>(value: T, reason: &str) -> CoreError {
    CoreError::InvalidNumeric(format!("'{value}': {reason}"))
}

/// Create time format error with time and reason
pub fn invalid_time<T: fmt::Display>(time: T, reason: &str) -> CoreError {
    CoreError::InvalidTime(format!("'{time}': {reason}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_error_message_includes_value_and_reason() {
        let error = invalid_numeric("abc", "not a number");
        assert_eq!(error.to_string(), "Invalid numeric value: 'abc': not a number");
        assert!(matches!(error, CoreError::InvalidNumeric(_)));
    }

    #[test]
    fn time_error_message_includes_value_and_reason() {
        let error = invalid_time("0:00.000", "minutes must be two digits");
        assert!(matches!(error, CoreError::InvalidTime(_)));
        assert!(error.to_string().contains("0:00.000"));
    }
}
