//! Diagnostic codes grouped by pipeline stage
//!
//! Codes are grouped by hundred blocks: signature problems in the 1000s,
//! timestamp problems in the 2000s, block structure in the 3000s and
//! cue-text markup in the 4000s.

use core::fmt;

/// Pipeline stage a diagnostic code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DiagnosticCategory {
    /// File signature validation
    Signature,

    /// Timestamp grammar and cue timing order
    Timestamp,

    /// Block classification and region settings
    Block,

    /// Inline cue markup
    CueText,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signature => write!(f, "signature"),
            Self::Timestamp => write!(f, "timestamp"),
            Self::Block => write!(f, "block"),
            Self::CueText => write!(f, "cue-text"),
        }
    }
}

/// Numeric diagnostic codes
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::{DiagnosticCategory, DiagnosticCode};
///
/// let code = DiagnosticCode::CueTimingInvalidOrder;
/// assert_eq!(code.code(), 2001);
/// assert_eq!(code.name(), "CUE_TIMING_INVALID_ORDER");
/// assert_eq!(code.category(), DiagnosticCategory::Timestamp);
/// assert_eq!(DiagnosticCode::from_code(2001), Some(code));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum DiagnosticCode {
    /// First six characters are not `WEBVTT`, or the seventh is not a separator
    SignatureInvalid = 1000,
    /// Input shorter than the signature itself
    SignatureTooShort = 1001,

    /// Timestamp does not follow the timestamp grammar
    TimestampInvalid = 2000,
    /// Cue start time is after its end time
    CueTimingInvalidOrder = 2001,
    /// Timing line arrow missing or malformed
    ArrowInvalid = 2002,

    /// Block found where it is not allowed
    BlockUnexpected = 3000,
    /// STYLE block dropped
    StyleIgnored = 3001,
    /// REGION block dropped
    RegionIgnored = 3002,
    /// Region setting value rejected
    RegionSettingInvalid = 3003,
    /// Region setting name not recognized
    RegionSettingUnknown = 3004,

    /// Cue text could not be tokenized
    CueTextTokenizerError = 4000,
    /// Malformed cue text tag
    CueTextTagMalformed = 4001,
    /// End tag without a matching start tag
    CueTextTagUnexpectedEnd = 4002,
    /// Invalid timestamp tag inside cue text
    CueTextTimestampInvalid = 4003,
}

impl DiagnosticCode {
    /// Every code in ascending numeric order
    pub const ALL: [Self; 14] = [
        Self::SignatureInvalid,
        Self::SignatureTooShort,
        Self::TimestampInvalid,
        Self::CueTimingInvalidOrder,
        Self::ArrowInvalid,
        Self::BlockUnexpected,
        Self::StyleIgnored,
        Self::RegionIgnored,
        Self::RegionSettingInvalid,
        Self::RegionSettingUnknown,
        Self::CueTextTokenizerError,
        Self::CueTextTagMalformed,
        Self::CueTextTagUnexpectedEnd,
        Self::CueTextTimestampInvalid,
    ];

    /// Numeric value of the code
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Constant-style name such as `TIMESTAMP_INVALID`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SignatureInvalid => "SIGNATURE_INVALID",
            Self::SignatureTooShort => "SIGNATURE_TOO_SHORT",
            Self::TimestampInvalid => "TIMESTAMP_INVALID",
            Self::CueTimingInvalidOrder => "CUE_TIMING_INVALID_ORDER",
            Self::ArrowInvalid => "ARROW_INVALID",
            Self::BlockUnexpected => "BLOCK_UNEXPECTED",
            Self::StyleIgnored => "STYLE_IGNORED",
            Self::RegionIgnored => "REGION_IGNORED",
            Self::RegionSettingInvalid => "REGION_SETTING_INVALID",
            Self::RegionSettingUnknown => "REGION_SETTING_UNKNOWN",
            Self::CueTextTokenizerError => "CUETEXT_TOKENIZER_ERROR",
            Self::CueTextTagMalformed => "CUETEXT_TAG_MALFORMED",
            Self::CueTextTagUnexpectedEnd => "CUETEXT_TAG_UNEXPECTED_END",
            Self::CueTextTimestampInvalid => "CUETEXT_TIMESTAMP_INVALID",
        }
    }

    /// Stage the code belongs to, derived from its hundred block
    #[must_use]
    pub const fn category(self) -> DiagnosticCategory {
        match self.code() / 1000 {
            1 => DiagnosticCategory::Signature,
            2 => DiagnosticCategory::Timestamp,
            3 => DiagnosticCategory::Block,
            _ => DiagnosticCategory::CueText,
        }
    }

    /// Look up a code by its numeric value
    #[must_use]
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.code() == code)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DiagnosticCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}
