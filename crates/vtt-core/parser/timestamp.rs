//! Timestamp grammar for cue timings and inline timestamp tags
//!
//! Two forms are accepted:
//!
//! - `MM:SS.mmm` where the minutes field is exactly two digits and may exceed 59
//! - `HH:MM:SS.mmm` where hours are one or more digits and minutes are 00-59
//!
//! Seconds are always two digits in `00..=59` and milliseconds always three
//! digits. Anything else is invalid; no partial value is ever produced.
//!
//! # Examples
//!
//! ```rust
//! use vtt_core::parser::timestamp::parse_timestamp;
//!
//! assert_eq!(parse_timestamp("00:01.250"), Some(1.25));
//! assert_eq!(parse_timestamp("01:00:00.000"), Some(3600.0));
//! assert_eq!(parse_timestamp("99:00.000"), Some(5940.0));
//! assert_eq!(parse_timestamp("00:60.000"), None);
//! ```

use crate::utils::{errors::invalid_time, CoreError};

/// Parse a timestamp into seconds, or `None` when it is invalid
#[must_use]
pub fn parse_timestamp(text: &str) -> Option<f64> {
    try_parse_timestamp(text).ok()
}

/// Parse a timestamp into seconds, reporting why it was rejected
///
/// # Errors
///
/// Returns [`CoreError::InvalidTime`] describing the first grammar violation.
pub fn try_parse_timestamp(text: &str) -> Result<f64, CoreError> {
    let millis = parse_timestamp_millis(text)?;
    // Integer milliseconds keep the division exact for every representable value
    #[allow(clippy::cast_precision_loss)]
    Ok(millis as f64 / 1000.0)
}

/// Parse a timestamp into whole milliseconds
///
/// # Errors
///
/// Returns [`CoreError::InvalidTime`] if the text does not follow the grammar
/// or the hour count overflows.
pub fn parse_timestamp_millis(text: &str) -> Result<u64, CoreError> {
    let fields: Vec<&str> = text.split(':').collect();

    let (hours, minutes, rest) = match fields.as_slice() {
        [minutes, rest] => {
            if !is_digits(minutes, 2) {
                return Err(invalid_time(text, "minutes must be exactly two digits"));
            }
            (0, parse_digits(text, minutes)?, *rest)
        }
        [hours, minutes, rest] => {
            if hours.is_empty() || !hours.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid_time(text, "hours must be one or more digits"));
            }
            if !is_digits(minutes, 2) {
                return Err(invalid_time(text, "minutes must be exactly two digits"));
            }
            let minutes = parse_digits(text, minutes)?;
            if minutes > 59 {
                return Err(invalid_time(text, "minutes must be less than 60"));
            }
            (parse_digits(text, hours)?, minutes, *rest)
        }
        _ => return Err(invalid_time(text, "expected MM:SS.mmm or HH:MM:SS.mmm")),
    };

    let (seconds, millis) = rest
        .split_once('.')
        .ok_or_else(|| invalid_time(text, "missing '.' before milliseconds"))?;

    if !is_digits(seconds, 2) {
        return Err(invalid_time(text, "seconds must be exactly two digits"));
    }
    if !is_digits(millis, 3) {
        return Err(invalid_time(text, "milliseconds must be exactly three digits"));
    }

    let seconds = parse_digits(text, seconds)?;
    if seconds > 59 {
        return Err(invalid_time(text, "seconds must be less than 60"));
    }
    let millis = parse_digits(text, millis)?;

    hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes * 60 + seconds))
        .and_then(|s| s.checked_mul(1000))
        .and_then(|ms| ms.checked_add(millis))
        .ok_or_else(|| invalid_time(text, "value too large"))
}

fn is_digits(field: &str, len: usize) -> bool {
    field.len() == len && field.bytes().all(|b| b.is_ascii_digit())
}

fn parse_digits(text: &str, field: &str) -> Result<u64, CoreError> {
    field
        .parse::<u64>()
        .map_err(|_| invalid_time(text, "value too large"))
}
