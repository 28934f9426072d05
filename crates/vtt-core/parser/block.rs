//! Block collector
//!
//! Consumes one block (a maximal run of non-empty lines) from the scanner and
//! classifies it as a cue, a REGION definition, a STYLE sheet, or none of
//! those. Classification dispatches to the timestamp, settings and cue-text
//! components, and any diagnostics they raise travel back with the block.

use alloc::sync::Arc;

use log::trace;

use super::{
    ast::{Block, Cue, Region, Stylesheet},
    cue_text::parse_cue_text,
    errors::{Diagnostic, DiagnosticCode},
    settings::{apply_cue_settings, RegionBuilder},
    timestamp::parse_timestamp,
};
use crate::tokenizer::Scanner;

/// Arrow separating start and end time on a timing line
pub const TIMING_ARROW: &str = "-->";

/// Surroundings a block is collected in
#[derive(Debug, Clone, Copy)]
pub struct BlockContext<'r> {
    /// Collecting the header block after the signature line
    pub in_header: bool,
    /// Regions declared so far, for `region:` cue settings
    pub regions: &'r [Arc<Region>],
    /// Build the markup tree of cue payloads
    pub cue_text_nodes: bool,
}

impl<'r> BlockContext<'r> {
    /// Body context with tree generation enabled
    #[must_use]
    pub const fn body(regions: &'r [Arc<Region>]) -> Self {
        Self {
            in_header: false,
            regions,
            cue_text_nodes: true,
        }
    }

    /// Header context with tree generation enabled
    #[must_use]
    pub const fn header() -> Self {
        Self {
            in_header: true,
            regions: &[],
            cue_text_nodes: true,
        }
    }
}

/// Classified block together with everything reported while classifying it
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedBlock {
    /// Block content
    pub block: Block,
    /// Diagnostics in discovery order
    pub diagnostics: Vec<Diagnostic>,
    /// Line of the first collected line
    pub line: usize,
}

/// Collect and classify the next block
///
/// Lines are consumed until an empty line or the end of input, together with
/// exactly one line ending after each line. The empty line that ends the
/// block is consumed too. Starting on an empty line yields an empty
/// [`Block::Other`].
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::{ast::Block, block::{collect_block, BlockContext}};
/// use vtt_core::tokenizer::Scanner;
///
/// let mut scanner = Scanner::new("intro\n00:01.000 --> 00:02.000 align:start\nHello\n\nnext");
/// let collected = collect_block(&mut scanner, &BlockContext::body(&[]));
///
/// let Block::Cue(cue) = collected.block else { panic!("expected a cue") };
/// assert_eq!(cue.id.as_deref(), Some("intro"));
/// assert_eq!(cue.text, "Hello");
/// assert_eq!(scanner.remaining(), "next");
/// ```
pub fn collect_block(scanner: &mut Scanner<'_>, context: &BlockContext<'_>) -> CollectedBlock {
    let line = scanner.line();
    let mut lines = Vec::new();

    while !scanner.is_end() {
        let text = scanner.collect_line();
        scanner.scan_line_ending();
        if text.is_empty() {
            break;
        }
        lines.push(text);
    }

    let mut diagnostics = Vec::new();
    let block = classify(&lines, line, context, &mut diagnostics);
    trace!(
        "block at line {line}: {} ({} lines, {} diagnostics)",
        block.kind().as_str(),
        lines.len(),
        diagnostics.len()
    );

    CollectedBlock {
        block,
        diagnostics,
        line,
    }
}

fn classify(
    lines: &[&str],
    first_line: usize,
    context: &BlockContext<'_>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Block {
    let timing_index = match lines {
        [first, ..] if first.contains(TIMING_ARROW) => Some(0),
        [_, second, ..] if second.contains(TIMING_ARROW) => Some(1),
        _ => None,
    };

    if let Some(index) = timing_index {
        return Block::Cue(parse_cue(lines, index, first_line, context, diagnostics));
    }

    if !context.in_header {
        if let Some((&first, rest)) = lines.split_first() {
            if is_block_header(first, "STYLE") {
                return Block::Style(Stylesheet::new(rest.join("\n")));
            }
            if is_block_header(first, "REGION") {
                let mut builder = RegionBuilder::new();
                for (offset, settings) in rest.iter().enumerate() {
                    builder.apply_line(settings, first_line + 1 + offset);
                }
                let (region, region_diagnostics) = builder.finish();
                diagnostics.extend(region_diagnostics);
                return Block::Region(region);
            }
        }
    }

    Block::Other(lines.iter().map(|line| (*line).to_string()).collect())
}

/// `keyword` followed by nothing but whitespace
fn is_block_header(line: &str, keyword: &str) -> bool {
    line.strip_prefix(keyword)
        .is_some_and(|rest| rest.chars().all(char::is_whitespace))
}

fn parse_cue(
    lines: &[&str],
    timing_index: usize,
    first_line: usize,
    context: &BlockContext<'_>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Cue {
    let mut cue = Cue {
        id: (timing_index == 1).then(|| lines[0].to_string()),
        ..Cue::default()
    };

    let timing = lines[timing_index];
    let timing_line = first_line + timing_index;
    let (start, rest) = timing.split_once(TIMING_ARROW).unwrap_or((timing, ""));
    let rest = rest.trim();
    let end = rest.split_whitespace().next().unwrap_or("");
    let settings = rest[end.len()..].trim();

    match (parse_timestamp(start.trim()), parse_timestamp(end)) {
        (Some(start_time), Some(end_time)) => {
            cue.start_time = start_time;
            cue.end_time = end_time;
            if start_time > end_time {
                diagnostics.push(
                    Diagnostic::error(
                        DiagnosticCode::CueTimingInvalidOrder,
                        "Start time must be less than or equal to end time",
                    )
                    .with_location(timing_line, 1)
                    .with_raw(timing),
                );
            }
        }
        _ => diagnostics.push(
            Diagnostic::error(DiagnosticCode::TimestampInvalid, "Invalid timestamp format")
                .with_location(timing_line, 1)
                .with_raw(timing),
        ),
    }

    if !settings.is_empty() {
        apply_cue_settings(settings, &mut cue, context.regions);
    }

    cue.text = lines[timing_index + 1..].join("\n");
    if context.cue_text_nodes {
        cue.tree = Some(parse_cue_text(&cue.text));
    }

    cue
}
