//! Top-level parse coordination
//!
//! Contains the `Parser` struct that sequences signature validation, header
//! handling and the block loop, and routes classified blocks into the result.

use alloc::sync::Arc;

use log::debug;

use super::{
    ast::{Block, Cue, Metadata, Region, Stylesheet},
    block::{collect_block, BlockContext, CollectedBlock, TIMING_ARROW},
    errors::{Diagnostic, DiagnosticCode},
    options::{ParserOptions, StylesheetMode},
    result::ParseResult,
    signature::{signature_text, validate_signature, SIGNATURE},
};
use crate::tokenizer::Scanner;

/// Internal parser state for one parse call
pub(super) struct Parser<'a> {
    /// Cursor over normalized input
    scanner: Scanner<'a>,
    /// Per-call configuration
    options: ParserOptions,
    /// Cues in source order
    cues: Vec<Cue>,
    /// Regions in declaration order
    regions: Vec<Arc<Region>>,
    /// Collected STYLE blocks
    stylesheets: Vec<Stylesheet>,
    /// Diagnostics in discovery order
    diagnostics: Vec<Diagnostic>,
    /// Signature text and header lines
    metadata: Metadata,
}

impl<'a> Parser<'a> {
    /// Create parser over already normalized input
    pub const fn new(source: &'a str, options: ParserOptions) -> Self {
        Self {
            scanner: Scanner::new(source),
            options,
            cues: Vec::new(),
            regions: Vec::new(),
            stylesheets: Vec::new(),
            diagnostics: Vec::new(),
            metadata: Metadata {
                signature_text: None,
                header_lines: Vec::new(),
            },
        }
    }

    /// Parse the whole input
    pub fn parse(mut self) -> ParseResult {
        self.diagnostics = validate_signature(self.scanner.remaining());

        if self.options.is_strict() && self.diagnostics.iter().any(Diagnostic::is_error) {
            debug!(
                "aborting strict parse after invalid signature ({} diagnostics)",
                self.diagnostics.len()
            );
            return self.finish();
        }

        self.parse_signature_line();
        self.parse_header();
        self.scanner.scan_line_endings();

        while !self.scanner.is_end() {
            let context = BlockContext {
                in_header: false,
                regions: &self.regions,
                cue_text_nodes: self.options.cue_text_nodes,
            };
            let collected = collect_block(&mut self.scanner, &context);
            self.route(collected);
            self.scanner.scan_line_endings();
        }

        self.finish()
    }

    /// Consume the first line
    ///
    /// A line without the signature prefix is kept for the block loop when it
    /// is already a timing line, which only happens in best-effort mode.
    fn parse_signature_line(&mut self) {
        let line = self.scanner.peek_line();
        if line.starts_with(SIGNATURE) || !line.contains(TIMING_ARROW) {
            let line = self.scanner.collect_line();
            self.metadata.signature_text = signature_text(line);
        }
        self.scanner.scan_line_ending();
    }

    /// Handle the line after the signature line
    ///
    /// A whitespace-only line separates header and body. Anything else starts
    /// a header block, which may still turn out to be a cue.
    fn parse_header(&mut self) {
        if self.scanner.is_end() {
            return;
        }

        if self.scanner.peek_line().trim().is_empty() {
            self.scanner.collect_line();
            self.scanner.scan_line_ending();
            return;
        }

        let context = BlockContext {
            in_header: true,
            regions: &self.regions,
            cue_text_nodes: self.options.cue_text_nodes,
        };
        let collected = collect_block(&mut self.scanner, &context);
        let line = collected.line;

        match collected.block {
            Block::Other(lines) => {
                self.diagnostics.extend(collected.diagnostics);
                self.metadata.header_lines = lines;
            }
            block => {
                self.diagnostics.push(
                    Diagnostic::warning(
                        DiagnosticCode::BlockUnexpected,
                        format!(
                            "Unexpected {} block in header; a blank line must follow the header",
                            block.kind().as_str()
                        ),
                    )
                    .with_location(line, 1),
                );
                self.route(CollectedBlock {
                    block,
                    diagnostics: collected.diagnostics,
                    line,
                });
            }
        }
    }

    /// Merge a block's diagnostics and store its value
    fn route(&mut self, collected: CollectedBlock) {
        self.diagnostics.extend(collected.diagnostics);

        match collected.block {
            Block::Cue(cue) => self.cues.push(cue),
            Block::Region(region) => self.regions.push(Arc::new(region)),
            Block::Style(stylesheet) => match self.options.stylesheets {
                StylesheetMode::Collect => self.stylesheets.push(stylesheet),
                StylesheetMode::Ignore => {}
            },
            Block::Other(_) => {}
        }
    }

    fn finish(self) -> ParseResult {
        debug!(
            "parsed {} cues, {} regions, {} stylesheets with {} diagnostics",
            self.cues.len(),
            self.regions.len(),
            self.stylesheets.len(),
            self.diagnostics.len()
        );

        ParseResult::new(
            self.cues,
            self.regions,
            self.stylesheets,
            self.diagnostics,
            self.metadata,
        )
    }
}
