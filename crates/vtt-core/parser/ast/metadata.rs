//! File metadata gathered from the signature line and header block
//!
//! The header is the block between the signature line and the first blank
//! line. Its lines are kept raw; `name:value` lookups are provided for the
//! common `Kind: captions` / `Language: en` convention.

/// Signature line text and header lines of a file
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::parse;
///
/// let result = parse("WEBVTT - Demo\nKind: captions\nLanguage: en\n\n00:01.000 --> 00:02.000\nHi");
/// let metadata = result.metadata();
///
/// assert_eq!(metadata.signature_text(), Some("- Demo"));
/// assert_eq!(metadata.header("Kind"), Some("captions"));
/// assert_eq!(metadata.header("language"), Some("en"));
/// assert_eq!(metadata.header("Title"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Metadata {
    /// Trimmed text after `WEBVTT` on the first line
    pub signature_text: Option<String>,

    /// Raw lines of a header block that was not a cue
    pub header_lines: Vec<String>,
}

impl Metadata {
    /// Text after the signature on the first line
    #[must_use]
    pub fn signature_text(&self) -> Option<&str> {
        self.signature_text.as_deref()
    }

    /// Raw header lines in source order
    #[must_use]
    pub fn header_lines(&self) -> &[String] {
        &self.header_lines
    }

    /// Look up a `name:value` header line by name (ASCII case-insensitive)
    ///
    /// Both name and value are trimmed. The first matching line wins.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Iterate over all `name:value` header lines
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.header_lines.iter().filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            Some((key.trim(), value.trim()))
        })
    }

    /// Check whether nothing was found besides the bare signature
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signature_text.is_none() && self.header_lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_skip_lines_without_colon() {
        let metadata = Metadata {
            signature_text: None,
            header_lines: vec![
                "Kind: captions".to_string(),
                "free text".to_string(),
                "X-TIMESTAMP-MAP=LOCAL:00:00:00.000,MPEGTS:0".to_string(),
            ],
        };

        let headers: Vec<_> = metadata.headers().collect();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0], ("Kind", "captions"));
        assert_eq!(metadata.header("kind"), Some("captions"));
    }

    #[test]
    fn empty_metadata() {
        assert!(Metadata::default().is_empty());
        assert_eq!(Metadata::default().header("Kind"), None);
    }
}
