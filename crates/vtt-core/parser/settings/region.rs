//! Region settings grammar
//!
//! Unlike cue settings, every rejected value and every unknown setting name
//! is reported. The region keeps its default for any rejected field.

use super::{split_settings, Setting};
use crate::{
    parser::{
        ast::{Anchor, Region, ScrollMode},
        errors::{Diagnostic, DiagnosticCode},
    },
    utils::{parse_bounded_percentage, CoreError},
};

/// Builds a region from one or more lines of settings
///
/// Lines of a REGION block are applied one at a time so diagnostics can
/// point at the exact line and column. This is equivalent to joining the
/// lines with a space, since a setting never spans lines.
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::settings::RegionBuilder;
///
/// let mut builder = RegionBuilder::new();
/// builder.apply_line("id:fred width:40%", 2);
/// builder.apply_line("lines:3 scroll:sideways", 3);
/// let (region, diagnostics) = builder.finish();
///
/// assert_eq!(region.id, "fred");
/// assert_eq!(region.width, 40.0);
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!((diagnostics[0].line, diagnostics[0].column), (3, 9));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegionBuilder {
    /// Region under construction
    region: Region,
    /// Problems found so far
    diagnostics: Vec<Diagnostic>,
}

impl RegionBuilder {
    /// Create builder starting from a default region
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the settings found on one source line
    ///
    /// `line` is the 1-based source line, or 0 when the settings are not tied
    /// to a file position.
    pub fn apply_line(&mut self, settings: &str, line: usize) {
        for setting in split_settings(settings) {
            if let Err(diagnostic) = self.apply_setting(&setting) {
                let diagnostic = if line == 0 {
                    diagnostic
                } else {
                    let column = settings[..setting.offset].chars().count() + 1;
                    diagnostic.with_location(line, column)
                };
                self.diagnostics.push(diagnostic.with_raw(setting.raw));
            }
        }
    }

    /// Finish building and return the region with its diagnostics
    #[must_use]
    pub fn finish(self) -> (Region, Vec<Diagnostic>) {
        (self.region, self.diagnostics)
    }

    fn apply_setting(&mut self, setting: &Setting<'_>) -> Result<(), Diagnostic> {
        let rejected = |error: CoreError| {
            Diagnostic::error(
                DiagnosticCode::RegionSettingInvalid,
                format!("Invalid value for region setting '{}': {error}", setting.name),
            )
        };

        match setting.name {
            "id" => self.region.id = setting.value.to_string(),
            "width" => self.region.width = parse_bounded_percentage(setting.value).map_err(rejected)?,
            "lines" => self.region.lines = parse_lines(setting.value).map_err(rejected)?,
            "regionanchor" => {
                self.region.region_anchor = parse_anchor(setting.value).map_err(rejected)?;
            }
            "viewportanchor" => {
                self.region.viewport_anchor = parse_anchor(setting.value).map_err(rejected)?;
            }
            "scroll" => {
                if setting.value != "up" {
                    return Err(Diagnostic::error(
                        DiagnosticCode::RegionSettingInvalid,
                        format!(
                            "Invalid value for region setting 'scroll': '{}' (only 'up' is allowed)",
                            setting.value
                        ),
                    ));
                }
                self.region.scroll = ScrollMode::Up;
            }
            other => {
                return Err(Diagnostic::warning(
                    DiagnosticCode::RegionSettingUnknown,
                    format!("Unknown region setting '{other}'"),
                ));
            }
        }

        Ok(())
    }
}

fn parse_lines(value: &str) -> Result<u32, CoreError> {
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::invalid_numeric(value, "expected a non-negative integer"));
    }
    value
        .parse::<u32>()
        .map_err(|e| CoreError::invalid_numeric(value, &e.to_string()))
}

fn parse_anchor(value: &str) -> Result<Anchor, CoreError> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| CoreError::invalid_numeric(value, "expected 'X%,Y%'"))?;
    Ok(Anchor::new(
        parse_bounded_percentage(x)?,
        parse_bounded_percentage(y)?,
    ))
}

/// Parse a single region settings string
///
/// Diagnostics are file-level since the string is not tied to a position.
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::{settings::parse_region_settings, DiagnosticCode};
///
/// let (region, diagnostics) = parse_region_settings("id:test width:150%");
/// assert_eq!(region.id, "test");
/// assert_eq!(region.width, 100.0);
/// assert_eq!(diagnostics[0].code, DiagnosticCode::RegionSettingInvalid);
/// ```
#[must_use]
pub fn parse_region_settings(input: &str) -> (Region, Vec<Diagnostic>) {
    let mut builder = RegionBuilder::new();
    builder.apply_line(input, 0);
    builder.finish()
}
