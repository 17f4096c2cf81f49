use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "locales[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings for one fill run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FillSettings {
    /// Direct locales, processed in this order.
    pub locales: Vec<String>,

    /// Derived locale, processed strictly after every direct locale.
    pub derived: Option<DerivedLocale>,

    /// Locale whose catalog is filled with the source phrases themselves
    /// (identity fill), bypassing the phrase catalog. `None` disables it.
    pub source_locale: Option<String>,

    /// Catalog files are named `<prefix>_<locale>.ts`.
    pub file_prefix: String,
}

/// A locale filled by transliterating another locale's finished texts.
///
/// Which locale falls back to which is configuration, not a hard-coded pair;
/// the default mirrors the common `zh_TW` ← `zh_CN` case.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedLocale {
    /// The locale whose catalog gets filled (e.g. `zh_TW`).
    pub locale: String,
    /// The already-processed locale whose finished texts feed the
    /// transliterator (e.g. `zh_CN`).
    pub fallback: String,
}

impl Default for FillSettings {
    fn default() -> Self {
        Self {
            locales: ["zh_CN", "ru_RU", "fa_IR", "vi_VN", "km_KH", "my_MM"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            derived: Some(DerivedLocale {
                locale: "zh_TW".to_string(),
                fallback: "zh_CN".to_string(),
            }),
            source_locale: Some("en_US".to_string()),
            file_prefix: "app".to_string(),
        }
    }
}

impl FillSettings {
    /// # Errors
    /// - No locale to process
    /// - Empty or duplicate locale entries
    /// - Derived locale inconsistencies
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.file_prefix.is_empty() {
            errors.push(ValidationError::new(
                "filePrefix",
                "The file prefix cannot be empty. Catalog files are looked up as \"<prefix>_<locale>.ts\"",
            ));
        }

        if self.locales.is_empty() && self.derived.is_none() && self.source_locale.is_none() {
            errors.push(ValidationError::new(
                "locales",
                "At least one locale is required. Example: [\"ru_RU\", \"zh_CN\"]",
            ));
        }

        for (index, locale) in self.locales.iter().enumerate() {
            if locale.is_empty() {
                errors.push(ValidationError::new(
                    format!("locales[{index}]"),
                    "Locale codes cannot be empty",
                ));
            }
            if self.locales.get(..index).is_some_and(|seen| seen.contains(locale)) {
                errors.push(ValidationError::new(
                    format!("locales[{index}]"),
                    format!("Duplicate locale '{locale}'"),
                ));
            }
        }

        if let Some(derived) = &self.derived {
            if derived.locale.is_empty() || derived.fallback.is_empty() {
                errors.push(ValidationError::new(
                    "derived",
                    "Both 'locale' and 'fallback' must be set",
                ));
            }
            if derived.locale == derived.fallback {
                errors.push(ValidationError::new(
                    "derived.fallback",
                    "The fallback locale must differ from the derived locale",
                ));
            }
            if self.locales.contains(&derived.locale) {
                errors.push(ValidationError::new(
                    "derived.locale",
                    format!(
                        "'{}' is also listed as a direct locale; a locale with its own catalog entries never falls back",
                        derived.locale
                    ),
                ));
            }
            if !derived.fallback.is_empty() && !self.locales.contains(&derived.fallback) {
                errors.push(ValidationError::new(
                    "derived.fallback",
                    format!(
                        "'{}' must be one of the direct locales so its catalog is processed first",
                        derived.fallback
                    ),
                ));
            }
        }

        if let Some(source) = &self.source_locale {
            if source.is_empty() {
                errors.push(ValidationError::new(
                    "sourceLocale",
                    "The source locale cannot be empty; omit it to disable the identity fill",
                ));
            }
            if self.locales.contains(source) {
                errors.push(ValidationError::new(
                    "sourceLocale",
                    format!(
                        "'{source}' is also listed as a direct locale; the source locale is filled from the source phrases, not the catalog"
                    ),
                ));
            }
            if self.derived.as_ref().is_some_and(|d| d.locale == *source) {
                errors.push(ValidationError::new(
                    "sourceLocale",
                    format!("'{source}' is also configured as the derived locale"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn validate_default_settings() {
        let settings = FillSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"filePrefix": "jingo"}"#;

        let settings: FillSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.file_prefix, eq("jingo"));
        assert_that!(settings.locales, len(eq(6)));
        assert_that!(settings.derived, some(anything()));
        assert_that!(settings.source_locale, some(eq("en_US")));
    }

    #[rstest]
    fn deserialize_full_settings() {
        let json = r#"{
            "locales": ["ru_RU", "zh_CN"],
            "derived": { "locale": "zh_TW", "fallback": "zh_CN" },
            "sourceLocale": null,
            "filePrefix": "app"
        }"#;

        let settings: FillSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.locales, elements_are![eq("ru_RU"), eq("zh_CN")]);
        assert_that!(settings.source_locale, none());
        let derived = settings.derived.unwrap();
        assert_that!(derived.locale, eq("zh_TW"));
        assert_that!(derived.fallback, eq("zh_CN"));
    }

    #[rstest]
    fn validate_empty_everything() {
        let settings = FillSettings {
            locales: vec![],
            derived: None,
            source_locale: None,
            ..FillSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![field!(ValidationError.field_path, eq("locales"))])
        );
    }

    #[rstest]
    fn validate_empty_file_prefix() {
        let settings = FillSettings { file_prefix: String::new(), ..FillSettings::default() };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("filePrefix")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_duplicate_locale() {
        let settings = FillSettings {
            locales: vec!["ru_RU".to_string(), "ru_RU".to_string()],
            derived: None,
            ..FillSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("locales[1]")),
                field!(ValidationError.message, contains_substring("Duplicate"))
            ]])
        );
    }

    #[rstest]
    fn validate_derived_equal_to_fallback() {
        let settings = FillSettings {
            locales: vec!["zh_CN".to_string()],
            derived: Some(DerivedLocale {
                locale: "zh_CN".to_string(),
                fallback: "zh_CN".to_string(),
            }),
            ..FillSettings::default()
        };

        let result = settings.validate();

        let errors = result.unwrap_err();
        assert_that!(
            errors,
            contains(field!(ValidationError.field_path, eq("derived.fallback")))
        );
        // zh_CN is also a direct locale.
        assert_that!(
            errors,
            contains(field!(ValidationError.field_path, eq("derived.locale")))
        );
    }

    #[rstest]
    fn validate_source_locale_listed_as_direct() {
        let settings = FillSettings {
            locales: vec!["en_US".to_string(), "ru_RU".to_string()],
            derived: None,
            source_locale: Some("en_US".to_string()),
            ..FillSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("sourceLocale")),
                field!(ValidationError.message, contains_substring("direct locale"))
            ]])
        );
    }

    #[rstest]
    fn validate_empty_source_locale() {
        let settings =
            FillSettings { source_locale: Some(String::new()), ..FillSettings::default() };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![field!(ValidationError.field_path, eq("sourceLocale"))])
        );
    }

    #[rstest]
    fn validate_fallback_not_processed() {
        let settings = FillSettings {
            locales: vec!["ru_RU".to_string()],
            derived: Some(DerivedLocale {
                locale: "zh_TW".to_string(),
                fallback: "zh_CN".to_string(),
            }),
            ..FillSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("derived.fallback")),
                field!(ValidationError.message, contains_substring("processed first"))
            ]])
        );
    }
}
