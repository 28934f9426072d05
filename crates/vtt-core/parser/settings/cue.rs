//! Cue settings grammar
//!
//! Settings are applied left to right, so their side effects on the region
//! reference follow token order: `line:0 region:r` keeps the region while
//! `region:r line:0` clears it. Unknown names and malformed values are
//! silently ignored.

use alloc::sync::Arc;

use super::split_settings;
use crate::{
    parser::ast::{
        Cue, CueLine, CuePosition, LineAlign, PositionAlign, Region, TextAlign, WritingDirection,
    },
    utils::{parse_bounded_percentage, parse_number},
};

/// Apply a cue settings string to `cue`
///
/// `regions` holds the regions declared so far; a `region` setting refers to
/// the last one with a matching identifier.
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::{ast::{Cue, CueLine, TextAlign}, settings::apply_cue_settings};
///
/// let mut cue = Cue::default();
/// apply_cue_settings("line:-1 align:start size:50%", &mut cue, &[]);
///
/// assert_eq!(cue.line, CueLine::Value(-1.0));
/// assert!(cue.snap_to_lines);
/// assert_eq!(cue.align, TextAlign::Start);
/// assert_eq!(cue.size, 50.0);
/// ```
pub fn apply_cue_settings(input: &str, cue: &mut Cue, regions: &[Arc<Region>]) {
    for setting in split_settings(input) {
        let value = setting.value;
        match setting.name {
            "region" => {
                if let Some(region) = regions.iter().rev().find(|region| region.id == value) {
                    cue.region = Some(Arc::clone(region));
                }
            }
            "vertical" => {
                if let Some(direction) = WritingDirection::from_setting(value) {
                    cue.vertical = direction;
                    cue.region = None;
                }
            }
            "line" => apply_line(value, cue),
            "position" => apply_position(value, cue),
            "size" => {
                if let Ok(size) = parse_bounded_percentage(value) {
                    cue.size = size;
                    if (size - 100.0).abs() > f64::EPSILON {
                        cue.region = None;
                    }
                }
            }
            "align" => {
                if let Some(align) = TextAlign::from_setting(value) {
                    cue.align = align;
                }
            }
            _ => {}
        }
    }
}

fn apply_line(value: &str, cue: &mut Cue) {
    let (position, align) = split_align(value);

    if position.ends_with('%') {
        if let Ok(percent) = parse_bounded_percentage(position) {
            cue.line = CueLine::Value(percent);
            cue.snap_to_lines = false;
        }
    } else if let Ok(number) = parse_number(position, true) {
        cue.line = CueLine::Value(number);
        cue.snap_to_lines = true;
    }

    if let Some(align) = align.and_then(LineAlign::from_setting) {
        cue.line_align = Some(align);
    }

    cue.region = None;
}

fn apply_position(value: &str, cue: &mut Cue) {
    let (position, align) = split_align(value);

    if let Ok(percent) = parse_bounded_percentage(position) {
        cue.position = CuePosition::Percent(percent);
    }

    if let Some(align) = align.and_then(PositionAlign::from_setting) {
        cue.position_align = align;
    }
}

fn split_align(value: &str) -> (&str, Option<&str>) {
    match value.split_once(',') {
        Some((position, align)) => (position, Some(align)),
        None => (value, None),
    }
}
