//! Core error type for VTT-RS operations
//!
//! Malformed subtitle content never surfaces here: the parser reports it as
//! [`Diagnostic`](crate::parser::Diagnostic) values and always returns a result.
//! `CoreError` covers the API-level failures around it, such as an unknown
//! configuration string or a standalone timestamp that does not parse.

use core::fmt;
use thiserror::Error;

/// Main error type for VTT-RS core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Timestamp text does not follow the `[HH:]MM:SS.mmm` grammar
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    /// Numeric or percentage value failed to parse or is out of range
    #[error("Invalid numeric value: {0}")]
    InvalidNumeric(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Create configuration error from message
    pub fn config<T: fmt::Display>(message: T) -> Self {
        Self::Config(format!("{message}"))
    }
}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, CoreError>;
