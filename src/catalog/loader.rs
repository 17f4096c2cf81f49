//! Phrase catalog loading.

use std::path::Path;

use super::{
    CatalogError,
    TranslationCatalog,
};

impl TranslationCatalog {
    /// Loads a catalog from a JSON file of the form
    /// `{ "phrase": { "locale": "text" } }`.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        tracing::debug!(path = %path.display(), "Loading phrase catalog");

        let content = std::fs::read_to_string(path)?;
        let catalog: Self = serde_json::from_str(&content)?;

        tracing::debug!(phrases = catalog.len(), "Phrase catalog loaded");
        Ok(catalog)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn load_valid_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("translations.json");
        fs::write(&path, r#"{"Connect": {"ru_RU": "Подключить"}}"#).unwrap();

        let catalog = TranslationCatalog::load(&path).unwrap();

        assert_eq!(catalog.lookup("Connect", "ru_RU"), Some("Подключить"));
    }

    #[rstest]
    fn load_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = TranslationCatalog::load(&temp_dir.path().join("nope.json"));

        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[rstest]
    fn load_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("translations.json");
        fs::write(&path, "not json").unwrap();

        let result = TranslationCatalog::load(&path);

        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
