//! Core error types for VTT-RS utilities and cross-module error handling
//!
//! Provides the main `CoreError` enum used by the fallible helper APIs.
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling (no `anyhow` bloat)
//! - Content problems in subtitle files are diagnostics, not errors
//! - Provide detailed context for debugging and user feedback
//!
//! # Examples
//!
//! ```rust
//! use vtt_core::utils::errors::CoreError;
//!
//! let time_err = CoreError::invalid_time("1:23", "missing milliseconds");
//! assert!(matches!(time_err, CoreError::InvalidTime(_)));
//! ```

mod core;
mod format;

pub use self::core::{CoreError, Result};
pub use self::format::{invalid_numeric, invalid_time};

impl CoreError {
    /// Create numeric error from parsing failure
    pub fn invalid_numeric<T: ::core::fmt::Display>(value: T, reason: &str) -> Self {
        format::invalid_numeric(value, reason)
    }

    /// Create time error from invalid format
    pub fn invalid_time<T: ::core::fmt::Display>(time: T, reason: &str) -> Self {
        format::invalid_time(time, reason)
    }
}
