//! Sequences the updater over the full set of target locales.
//!
//! Direct locales are processed first, in configured order. The derived
//! locale runs strictly afterwards so its fallback can observe the texts that
//! were finished for the fallback locale earlier in the same run.

use std::collections::HashMap;
use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use crate::catalog::TranslationCatalog;
use crate::config::FillSettings;
use crate::resolve::FallbackSource;
use crate::translit::Transliterator;
use crate::ts::{
    TsDocument,
    TsError,
};
use crate::update::{
    UpdateStats,
    fill_from_source,
    update_document,
};

/// Errors that cause one locale to be skipped. Never fatal to the run.
#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Failed to read catalog file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write catalog file: {0}")]
    Write(#[source] std::io::Error),

    #[error(transparent)]
    Parse(#[from] TsError),
}

/// Outcome for a single locale.
#[derive(Debug)]
pub enum LocaleOutcome {
    /// The locale's catalog was updated and written back.
    Updated(UpdateStats),
    /// The locale was skipped; the rest of the run continued.
    Skipped(LocaleError),
}

/// Per-locale outcomes plus aggregate totals for one run.
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<(String, LocaleOutcome)>,
}

impl RunReport {
    fn record(&mut self, locale: &str, outcome: LocaleOutcome) {
        self.outcomes.push((locale.to_string(), outcome));
    }

    /// Per-locale outcomes in processing order.
    #[must_use]
    pub fn outcomes(&self) -> &[(String, LocaleOutcome)] {
        &self.outcomes
    }

    /// Aggregate counts across every updated locale.
    #[must_use]
    pub fn totals(&self) -> UpdateStats {
        let mut totals = UpdateStats::default();
        for (_, outcome) in &self.outcomes {
            if let LocaleOutcome::Updated(stats) = outcome {
                totals.add(*stats);
            }
        }
        totals
    }

    /// Number of locales skipped because of load or write failures.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, LocaleOutcome::Skipped(_)))
            .count()
    }
}

/// Runs the updater over every configured locale.
///
/// A failure for one locale is logged, recorded in the report and does not
/// abort the remaining locales.
#[must_use]
pub fn run(settings: &FillSettings, catalog: &TranslationCatalog, dir: &Path) -> RunReport {
    let mut report = RunReport::default();

    if let Some(source) = &settings.source_locale {
        let path = catalog_path(dir, &settings.file_prefix, source);
        match update_source_locale(&path, source) {
            Ok(stats) => report.record(source, LocaleOutcome::Updated(stats)),
            Err(e) => {
                tracing::warn!(locale = %source, error = %e, "Source locale skipped");
                report.record(source, LocaleOutcome::Skipped(e));
            }
        }
    }

    // Finished texts of the derived locale's fallback, harvested after that
    // locale's own pass so freshly filled units are included.
    let mut harvested: HashMap<String, String> = HashMap::new();

    for locale in &settings.locales {
        let path = catalog_path(dir, &settings.file_prefix, locale);
        match update_locale(&path, locale, catalog, None) {
            Ok((stats, finished)) => {
                if settings.derived.as_ref().is_some_and(|d| d.fallback == *locale) {
                    harvested = finished;
                }
                report.record(locale, LocaleOutcome::Updated(stats));
            }
            Err(e) => {
                tracing::warn!(locale = %locale, error = %e, "Locale skipped");
                report.record(locale, LocaleOutcome::Skipped(e));
            }
        }
    }

    if let Some(derived) = &settings.derived {
        let transliterator = Transliterator::simplified_to_traditional();
        let fallback = FallbackSource {
            locale: &derived.fallback,
            harvested: &harvested,
            transliterator: &transliterator,
        };
        let path = catalog_path(dir, &settings.file_prefix, &derived.locale);
        match update_locale(&path, &derived.locale, catalog, Some(fallback)) {
            Ok((stats, _)) => report.record(&derived.locale, LocaleOutcome::Updated(stats)),
            Err(e) => {
                tracing::warn!(locale = %derived.locale, error = %e, "Derived locale skipped");
                report.record(&derived.locale, LocaleOutcome::Skipped(e));
            }
        }
    }

    report
}

/// Loads, updates and persists one locale's catalog file.
///
/// Also returns the document's finished texts so the caller can feed the
/// derived-locale fallback.
fn update_locale(
    path: &Path,
    locale: &str,
    catalog: &TranslationCatalog,
    fallback: Option<FallbackSource<'_>>,
) -> Result<(UpdateStats, HashMap<String, String>), LocaleError> {
    let text = fs::read_to_string(path).map_err(LocaleError::Read)?;
    let mut doc = TsDocument::parse(&text)?;

    let stats = update_document(&mut doc, locale, catalog, fallback);

    fs::write(path, doc.write_to_string()).map_err(LocaleError::Write)?;
    tracing::info!(locale, filled = stats.filled, missing = stats.missing, "Catalog updated");

    Ok((stats, doc.finished_texts()))
}

/// Loads, identity-fills and persists the source locale's catalog file.
///
/// The source locale's texts are the source phrases themselves, so the phrase
/// catalog plays no part here.
fn update_source_locale(path: &Path, locale: &str) -> Result<UpdateStats, LocaleError> {
    let text = fs::read_to_string(path).map_err(LocaleError::Read)?;
    let mut doc = TsDocument::parse(&text)?;

    let stats = fill_from_source(&mut doc);

    fs::write(path, doc.write_to_string()).map_err(LocaleError::Write)?;
    tracing::info!(locale, filled = stats.filled, missing = stats.missing, "Catalog updated");

    Ok(stats)
}

/// Catalog files are named `<prefix>_<locale>.ts`.
fn catalog_path(dir: &Path, prefix: &str, locale: &str) -> PathBuf {
    dir.join(format!("{prefix}_{locale}.ts"))
}
