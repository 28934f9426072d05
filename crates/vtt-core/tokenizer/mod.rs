//! Lexical layer for WebVTT text
//!
//! Holds the line [`Scanner`] the block collector walks the file with, and
//! the [`CueTextTokenizer`] state machine that splits a cue payload into
//! text runs, start tags, end tags and timestamp tags.
//!
//! The tokenizer never fails. Unterminated tags at end of input are dropped
//! and a trailing text run is emitted as a final token. Character references
//! such as `&amp;` are passed through as literal text.
//!
//! # Example
//!
//! ```rust
//! use vtt_core::tokenizer::{CueTextToken, CueTextTokenizer};
//!
//! let tokens: Vec<_> = CueTextTokenizer::new("<b>Hi</b> there").collect();
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[1], CueTextToken::Text("Hi".to_string()));
//! assert_eq!(tokens[2], CueTextToken::EndTag("b".to_string()));
//! ```

use core::{iter::FusedIterator, mem, str::Chars};

pub mod scanner;
pub mod state;
pub mod tokens;

pub use scanner::{Scanner, Whitespace};
pub use state::TokenizerState;
pub use tokens::{CueTextToken, StartTag};

/// Character-level tokenizer for cue payload markup
#[derive(Debug, Clone)]
pub struct CueTextTokenizer<'a> {
    /// Remaining payload characters
    chars: Chars<'a>,
    /// State carried between tokens
    state: TokenizerState,
}

impl<'a> CueTextTokenizer<'a> {
    /// Create tokenizer over a cue payload
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            state: TokenizerState::Data,
        }
    }

    /// Current state of the machine
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        self.state
    }

    fn emit_start_tag(&mut self, tag: StartTag) -> Option<CueTextToken> {
        self.state = TokenizerState::Data;
        Some(CueTextToken::StartTag(tag))
    }

    fn finish(&self, buffer: String) -> Option<CueTextToken> {
        (self.state == TokenizerState::Data && !buffer.is_empty())
            .then_some(CueTextToken::Text(buffer))
    }
}

impl Iterator for CueTextTokenizer<'_> {
    type Item = CueTextToken;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buffer = String::new();
        let mut tag = StartTag::default();

        loop {
            let Some(ch) = self.chars.next() else {
                return self.finish(buffer);
            };

            match self.state {
                TokenizerState::Data => {
                    if ch == '<' {
                        self.state = TokenizerState::Tag;
                        if !buffer.is_empty() {
                            return Some(CueTextToken::Text(buffer));
                        }
                    } else {
                        buffer.push(ch);
                    }
                }
                TokenizerState::Tag => match TokenizerState::after_tag_open(ch) {
                    None => self.state = TokenizerState::Data,
                    Some(next) => {
                        match next {
                            TokenizerState::StartTag => tag.name.push(ch),
                            TokenizerState::TimestampTag => buffer.push(ch),
                            _ => {}
                        }
                        self.state = next;
                    }
                },
                TokenizerState::StartTag => match ch {
                    '>' => return self.emit_start_tag(tag),
                    '.' => self.state = TokenizerState::StartTagClass,
                    _ if Whitespace::ASCII.matches(ch) => {
                        self.state = TokenizerState::StartTagAnnotation;
                    }
                    _ => tag.name.push(ch),
                },
                TokenizerState::StartTagClass => match ch {
                    '>' => {
                        push_class(&mut tag, &mut buffer);
                        return self.emit_start_tag(tag);
                    }
                    '.' => push_class(&mut tag, &mut buffer),
                    _ if Whitespace::ASCII.matches(ch) => {
                        push_class(&mut tag, &mut buffer);
                        self.state = TokenizerState::StartTagAnnotation;
                    }
                    _ => buffer.push(ch),
                },
                TokenizerState::StartTagAnnotation => {
                    if ch == '>' {
                        tag.annotation = Some(buffer.trim().to_string());
                        return self.emit_start_tag(tag);
                    }
                    buffer.push(ch);
                }
                TokenizerState::EndTag => {
                    if ch == '>' {
                        self.state = TokenizerState::Data;
                        return Some(CueTextToken::EndTag(buffer));
                    }
                    buffer.push(ch);
                }
                TokenizerState::TimestampTag => {
                    if ch == '>' {
                        self.state = TokenizerState::Data;
                        return Some(CueTextToken::Timestamp(buffer));
                    }
                    buffer.push(ch);
                }
            }
        }
    }
}

impl FusedIterator for CueTextTokenizer<'_> {}

fn push_class(tag: &mut StartTag, buffer: &mut String) {
    if !buffer.is_empty() {
        tag.classes.push(mem::take(buffer));
    }
}

/// Tokenize a whole cue payload
#[must_use]
pub fn tokenize_cue_text(input: &str) -> Vec<CueTextToken> {
    CueTextTokenizer::new(input).collect()
}
