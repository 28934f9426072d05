//! Aggregated parse output

use alloc::sync::Arc;

use super::{
    ast::{Cue, Metadata, Region, Stylesheet},
    errors::Diagnostic,
};

/// Owned pieces of a [`ParseResult`]
pub type ParseParts = (
    Vec<Cue>,
    Vec<Arc<Region>>,
    Vec<Stylesheet>,
    Vec<Diagnostic>,
    Metadata,
);

/// Everything a parse call produced
///
/// A parse always yields a result, whatever the input. Problems with the
/// content are listed in [`diagnostics`](Self::diagnostics).
///
/// # Examples
///
/// ```rust
/// use vtt_core::parser::parse;
///
/// let result = parse("WEBVTT\n\n00:00.000 --> 00:01.000\nCue 1\n\n00:02.000 --> 00:03.000\nCue 2");
/// assert_eq!(result.cues().len(), 2);
/// assert_eq!(result.cues()[1].text, "Cue 2");
/// assert!(!result.has_errors());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseResult {
    /// Cues in source order
    cues: Vec<Cue>,

    /// Regions in declaration order, shared with the cues that use them
    regions: Vec<Arc<Region>>,

    /// Stylesheets in source order
    stylesheets: Vec<Stylesheet>,

    /// Diagnostics in discovery order
    diagnostics: Vec<Diagnostic>,

    /// Signature text and header lines
    metadata: Metadata,
}

impl ParseResult {
    pub(super) const fn new(
        cues: Vec<Cue>,
        regions: Vec<Arc<Region>>,
        stylesheets: Vec<Stylesheet>,
        diagnostics: Vec<Diagnostic>,
        metadata: Metadata,
    ) -> Self {
        Self {
            cues,
            regions,
            stylesheets,
            diagnostics,
            metadata,
        }
    }

    /// Parsed cues
    #[must_use]
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Parsed regions
    #[must_use]
    pub fn regions(&self) -> &[Arc<Region>] {
        &self.regions
    }

    /// Collected stylesheets
    #[must_use]
    pub fn stylesheets(&self) -> &[Stylesheet] {
        &self.stylesheets
    }

    /// All diagnostics, errors and warnings alike
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// File metadata from the signature line and header
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Check whether any diagnostic is an error
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Error-severity diagnostics only
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Look up a region by identifier, last declaration wins
    #[must_use]
    pub fn region(&self, id: &str) -> Option<&Arc<Region>> {
        self.regions.iter().rev().find(|region| region.id == id)
    }

    /// Take ownership of cues, regions, stylesheets, diagnostics and metadata
    #[must_use]
    pub fn into_parts(self) -> ParseParts {
        (
            self.cues,
            self.regions,
            self.stylesheets,
            self.diagnostics,
            self.metadata,
        )
    }
}
