//! Cue and region settings grammars
//!
//! Both grammars share one tokenization rule: the input is split on ASCII
//! whitespace and each piece is split at its first `:` into a name and a
//! value. Pieces without a colon, or with the colon first or last, are
//! skipped without comment.
//!
//! Cue settings never produce diagnostics. Region settings report every
//! rejected or unknown setting.

mod cue;
mod region;

pub use cue::apply_cue_settings;
pub use region::{parse_region_settings, RegionBuilder};

use crate::tokenizer::Whitespace;

/// One `name:value` setting with its position in the settings string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting<'a> {
    /// Text before the first colon
    pub name: &'a str,
    /// Text after the first colon
    pub value: &'a str,
    /// Whole whitespace-delimited token
    pub raw: &'a str,
    /// Byte offset of the token in the settings string
    pub offset: usize,
}

/// Split a settings string into `name:value` settings
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::settings::split_settings;
///
/// let settings = split_settings("align:start  bogus :x line:");
/// assert_eq!(settings.len(), 1);
/// assert_eq!((settings[0].name, settings[0].value), ("align", "start"));
/// ```
#[must_use]
pub fn split_settings(input: &str) -> Vec<Setting<'_>> {
    let mut settings = Vec::new();
    let mut start = None;

    let boundaries = input.char_indices().chain(core::iter::once((input.len(), ' ')));
    for (index, ch) in boundaries {
        if Whitespace::ASCII.matches(ch) {
            if let Some(begin) = start.take() {
                if let Some(setting) = split_setting(&input[begin..index], begin) {
                    settings.push(setting);
                }
            }
        } else if start.is_none() {
            start = Some(index);
        }
    }

    settings
}

fn split_setting(raw: &str, offset: usize) -> Option<Setting<'_>> {
    let (name, value) = raw.split_once(':')?;
    if name.is_empty() || value.is_empty() {
        return None;
    }
    Some(Setting {
        name,
        value,
        raw,
        offset,
    })
}
