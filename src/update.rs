//! Applies the resolver across one catalog document.

use crate::catalog::TranslationCatalog;
use crate::resolve::{
    FallbackSource,
    Resolution,
    resolve,
};
use crate::ts::TsDocument;

/// Counts reported by one updater pass over a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateStats {
    /// Units filled during this pass.
    pub filled: usize,
    /// Unfinished units with no translation available.
    pub missing: usize,
}

impl UpdateStats {
    pub(crate) fn add(&mut self, other: Self) {
        self.filled += other.filled;
        self.missing += other.missing;
    }
}

/// Fills every resolvable unfinished unit of `doc` for `target_locale`.
///
/// Finished units are skipped entirely and counted in neither total, so the
/// pass is idempotent: a second run over the same document fills nothing.
pub fn update_document(
    doc: &mut TsDocument,
    target_locale: &str,
    catalog: &TranslationCatalog,
    fallback: Option<FallbackSource<'_>>,
) -> UpdateStats {
    let mut stats = UpdateStats::default();

    for unit in doc.units_mut() {
        if !unit.is_unfinished() {
            continue;
        }
        match resolve(unit.source(), target_locale, catalog, fallback) {
            Resolution::Resolved(text) => {
                tracing::trace!(locale = target_locale, source = unit.source(), "Unit filled");
                unit.fill(text);
                stats.filled += 1;
            }
            Resolution::Unresolved => {
                tracing::trace!(
                    locale = target_locale,
                    source = unit.source(),
                    "No translation available"
                );
                stats.missing += 1;
            }
        }
    }

    stats
}

/// Fills every unfinished unit of `doc` with its own source phrase.
///
/// Used for the source locale's catalog, whose texts are the source-language
/// phrases themselves; the phrase catalog is never consulted.
pub fn fill_from_source(doc: &mut TsDocument) -> UpdateStats {
    let mut stats = UpdateStats::default();

    for unit in doc.units_mut() {
        if !unit.is_unfinished() {
            continue;
        }
        let text = unit.source().to_string();
        unit.fill(text);
        stats.filled += 1;
    }

    stats
}
