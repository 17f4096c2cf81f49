use std::ops::Range;

use thiserror::Error;

/// Errors raised while parsing a `.ts` catalog document.
#[derive(Error, Debug)]
pub enum TsError {
    #[error("Failed to parse catalog XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("Unexpected end of document inside <{0}>")]
    UnexpectedEof(&'static str),
}

/// Finished/unfinished state of a translation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitState {
    /// Translation present and accepted (no `type` attribute).
    Finished,
    /// Awaiting translation (`type="unfinished"`).
    Unfinished,
    /// Source string no longer referenced (`type="vanished"` or
    /// `type="obsolete"`); never touched.
    Obsolete,
}

/// One localizable string occurrence in a catalog document.
///
/// Created by [`super::TsDocument::parse`]; the updater may fill an unfinished
/// unit, which stages a replacement for the unit's `<translation>` element.
/// Units are never created or destroyed by this crate.
#[derive(Debug, Clone)]
pub struct TranslationUnit {
    pub(super) source: String,
    pub(super) text: String,
    pub(super) state: UnitState,
    /// Byte span of the `<translation>` element in the original document.
    pub(super) span: Range<usize>,
    /// Set when the unit was filled during this run.
    pub(super) dirty: bool,
}

impl TranslationUnit {
    /// The source-language phrase.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The current translation text (empty for untranslated units).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn state(&self) -> UnitState {
        self.state
    }

    #[must_use]
    pub fn is_unfinished(&self) -> bool {
        self.state == UnitState::Unfinished
    }

    /// Sets the translation text and transitions the unit to finished.
    ///
    /// Only meaningful for unfinished units; the updater never calls this for
    /// units that are already finished.
    pub fn fill(&mut self, text: String) {
        self.text = text;
        self.state = UnitState::Finished;
        self.dirty = true;
    }
}
