//! Tokenizer state machine states
//!
//! Tracks which part of the cue markup the tokenizer is inside. Only the
//! character right after `<` chooses between timestamp, end tag, class list
//! or annotation; everything else accumulates into the current buffer.

/// Cue text tokenizer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizerState {
    /// Plain text outside any tag
    #[default]
    Data,

    /// Just consumed `<`, nothing of the tag seen yet
    Tag,

    /// Inside a start tag name
    StartTag,

    /// Inside a start tag class name, after a `.`
    StartTagClass,

    /// Inside a start tag annotation, after whitespace
    StartTagAnnotation,

    /// Inside an end tag name, after `</`
    EndTag,

    /// Inside a timestamp tag, after `<` and a digit
    TimestampTag,
}

impl TokenizerState {
    /// Check if the state is inside a `<...>` construct
    #[must_use]
    pub const fn is_inside_tag(self) -> bool {
        !matches!(self, Self::Data)
    }

    /// State entered from [`TokenizerState::Tag`] for the first tag character
    ///
    /// Returns `None` for `>`, which closes an empty tag.
    #[must_use]
    pub const fn after_tag_open(ch: char) -> Option<Self> {
        match ch {
            '>' => None,
            '\t' | '\n' | '\u{000C}' | ' ' => Some(Self::StartTagAnnotation),
            '.' => Some(Self::StartTagClass),
            '/' => Some(Self::EndTag),
            '0'..='9' => Some(Self::TimestampTag),
            _ => Some(Self::StartTag),
        }
    }
}
