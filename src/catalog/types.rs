use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading the phrase catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Pre-authored translations: source phrase → locale → localized text.
///
/// Loaded once at startup and never mutated during a run. A missing phrase or
/// locale simply means "no direct translation", never an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TranslationCatalog {
    entries: HashMap<String, HashMap<String, String>>,
}

impl TranslationCatalog {
    #[must_use]
    pub fn new(entries: HashMap<String, HashMap<String, String>>) -> Self {
        Self { entries }
    }

    /// Looks up the direct translation of `phrase` for `locale`.
    #[must_use]
    pub fn lookup(&self, phrase: &str, locale: &str) -> Option<&str> {
        self.entries.get(phrase).and_then(|per_locale| per_locale.get(locale)).map(String::as_str)
    }

    /// Number of source phrases in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
