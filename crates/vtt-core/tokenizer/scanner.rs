//! Line-oriented cursor over normalized WebVTT text
//!
//! The scanner never moves backwards and every primitive costs time
//! proportional to what it consumes. Operations at end of input are no-ops.
//! Input is expected to be normalized, so LF is the only line terminator.

use core::str::Chars;

bitflags::bitflags! {
    /// Character classes accepted by [`Scanner::skip_whitespace`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Whitespace: u8 {
        /// U+0020 SPACE
        const SPACE = 1 << 0;
        /// U+0009 CHARACTER TABULATION
        const TAB = 1 << 1;
        /// U+000A LINE FEED
        const LINE_FEED = 1 << 2;
        /// U+000C FORM FEED
        const FORM_FEED = 1 << 3;
        /// Whitespace that stays within a line
        const INLINE = Self::SPACE.bits() | Self::TAB.bits() | Self::FORM_FEED.bits();
        /// ASCII whitespace of normalized text
        const ASCII = Self::INLINE.bits() | Self::LINE_FEED.bits();
    }
}

impl Whitespace {
    /// Check whether `ch` belongs to this whitespace class
    #[must_use]
    pub const fn matches(self, ch: char) -> bool {
        match ch {
            ' ' => self.contains(Self::SPACE),
            '\t' => self.contains(Self::TAB),
            '\n' => self.contains(Self::LINE_FEED),
            '\u{000C}' => self.contains(Self::FORM_FEED),
            _ => false,
        }
    }
}

/// Cursor over normalized input
///
/// # Example
///
/// ```rust
/// use vtt_core::tokenizer::Scanner;
///
/// let mut scanner = Scanner::new("WEBVTT\n\n00:01.000 --> 00:02.000");
/// assert_eq!(scanner.collect_line(), "WEBVTT");
/// assert_eq!(scanner.scan_line_endings(), 2);
/// assert_eq!(scanner.line(), 3);
/// assert_eq!(scanner.collect_line(), "00:01.000 --> 00:02.000");
/// assert!(scanner.is_end());
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// Source text being scanned
    source: &'a str,
    /// Current byte position in source
    position: usize,
    /// Current line number (1-based)
    line: usize,
}

impl<'a> Scanner<'a> {
    /// Create scanner positioned at the start of `source`
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Current byte position
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Line number of the current position (1-based)
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Check if at end of source
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Unconsumed remainder of the source
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Character at the current position, if any
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.chars().next()
    }

    /// Consume characters while `predicate` holds and return them
    pub fn collect_while<F>(&mut self, mut predicate: F) -> &'a str
    where
        F: FnMut(char) -> bool,
    {
        let rest = self.remaining();
        let len = rest
            .char_indices()
            .find(|&(_, ch)| !predicate(ch))
            .map_or(rest.len(), |(index, _)| index);
        self.advance(len)
    }

    /// Consume everything up to, but not including, the next LF
    pub fn collect_line(&mut self) -> &'a str {
        let len = self.line_len();
        self.advance(len)
    }

    /// Look at the text up to the next LF without consuming it
    #[must_use]
    pub fn peek_line(&self) -> &'a str {
        &self.remaining()[..self.line_len()]
    }

    /// Consume exactly one LF if present
    pub fn scan_line_ending(&mut self) -> bool {
        self.scan("\n")
    }

    /// Consume a run of consecutive LFs and return how many were consumed
    pub fn scan_line_endings(&mut self) -> usize {
        self.collect_while(|ch| ch == '\n').len()
    }

    /// Skip characters of the given whitespace class
    pub fn skip_whitespace(&mut self, class: Whitespace) -> usize {
        self.collect_while(|ch| class.matches(ch)).len()
    }

    /// Consume `expected` if the remainder starts with it
    pub fn scan(&mut self, expected: &str) -> bool {
        if self.remaining().starts_with(expected) {
            self.advance(expected.len());
            true
        } else {
            false
        }
    }

    fn chars(&self) -> Chars<'a> {
        self.remaining().chars()
    }

    fn line_len(&self) -> usize {
        let rest = self.remaining();
        rest.find('\n').unwrap_or(rest.len())
    }

    fn advance(&mut self, len: usize) -> &'a str {
        let consumed = &self.source[self.position..self.position + len];
        self.line += consumed.bytes().filter(|&b| b == b'\n').count();
        self.position += len;
        consumed
    }
}
