//! Per-unit translation resolution.
//!
//! Resolution is a pure function of the phrase, the target locale, the
//! catalog snapshot and the optional fallback source. Absence of a
//! translation is an outcome, not an error.

use std::collections::HashMap;

use crate::catalog::TranslationCatalog;
use crate::translit::Transliterator;

/// Outcome of resolving one source phrase for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A localized text was found, directly or via the fallback locale.
    Resolved(String),
    /// No translation is available; the unit stays unfinished.
    Unresolved,
}

/// Fallback source for a derived locale.
///
/// A derived locale (e.g. `zh_TW`) has no translations of its own. Its texts
/// are produced by transliterating the fallback locale's texts: the static
/// catalog entries first, then texts harvested from the fallback locale's
/// already-finished units earlier in the same run.
#[derive(Debug, Clone, Copy)]
pub struct FallbackSource<'a> {
    /// Locale whose texts feed the transliterator (e.g. `zh_CN`).
    pub locale: &'a str,
    /// Finished texts harvested from the fallback locale's document.
    pub harvested: &'a HashMap<String, String>,
    /// Script converter applied to every fallback hit.
    pub transliterator: &'a Transliterator,
}

impl FallbackSource<'_> {
    fn text_for(&self, phrase: &str, catalog: &TranslationCatalog) -> Option<String> {
        catalog
            .lookup(phrase, self.locale)
            .or_else(|| self.harvested.get(phrase).map(String::as_str))
            .map(|base| self.transliterator.convert(base))
    }
}

/// Resolves `phrase` for `target_locale`.
///
/// A direct catalog hit always wins; the fallback is attempted only when one
/// is supplied, i.e. only for the derived locale.
#[must_use]
pub fn resolve(
    phrase: &str,
    target_locale: &str,
    catalog: &TranslationCatalog,
    fallback: Option<FallbackSource<'_>>,
) -> Resolution {
    if let Some(text) = catalog.lookup(phrase, target_locale) {
        return Resolution::Resolved(text.to_string());
    }

    if let Some(text) = fallback.and_then(|fb| fb.text_for(phrase, catalog)) {
        return Resolution::Resolved(text);
    }

    Resolution::Unresolved
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn catalog() -> TranslationCatalog {
        serde_json::from_str(
            r#"{
                "Connect": { "ru_RU": "Подключить", "zh_CN": "连接", "zh_TW": "連線" },
                "Network": { "zh_CN": "网络" }
            }"#,
        )
        .unwrap()
    }

    #[googletest::test]
    fn direct_hit() {
        let resolution = resolve("Connect", "ru_RU", &catalog(), None);

        expect_that!(resolution, eq(&Resolution::Resolved("Подключить".to_string())));
    }

    #[rstest]
    #[case::missing_phrase("Foo", "ru_RU")]
    #[case::missing_locale("Network", "fa_IR")]
    fn miss_without_fallback(#[case] phrase: &str, #[case] locale: &str) {
        let resolution = resolve(phrase, locale, &catalog(), None);

        assert_eq!(resolution, Resolution::Unresolved);
    }

    #[googletest::test]
    fn fallback_transliterates_catalog_entry() {
        let translit = Transliterator::simplified_to_traditional();
        let harvested = HashMap::new();
        let fallback = FallbackSource {
            locale: "zh_CN",
            harvested: &harvested,
            transliterator: &translit,
        };

        let resolution = resolve("Network", "zh_TW", &catalog(), Some(fallback));

        expect_that!(resolution, eq(&Resolution::Resolved("網絡".to_string())));
    }

    #[googletest::test]
    fn direct_wins_over_fallback() {
        let translit = Transliterator::simplified_to_traditional();
        let harvested = HashMap::new();
        let fallback = FallbackSource {
            locale: "zh_CN",
            harvested: &harvested,
            transliterator: &translit,
        };

        // "Connect" has both a zh_TW entry and a zh_CN fallback; the direct
        // entry must be returned untransliterated.
        let resolution = resolve("Connect", "zh_TW", &catalog(), Some(fallback));

        expect_that!(resolution, eq(&Resolution::Resolved("連線".to_string())));
    }

    #[googletest::test]
    fn fallback_uses_harvested_texts() {
        let translit = Transliterator::simplified_to_traditional();
        let mut harvested = HashMap::new();
        harvested.insert("Server".to_string(), "服务器".to_string());
        let fallback = FallbackSource {
            locale: "zh_CN",
            harvested: &harvested,
            transliterator: &translit,
        };

        let resolution = resolve("Server", "zh_TW", &catalog(), Some(fallback));

        expect_that!(resolution, eq(&Resolution::Resolved("服務器".to_string())));
    }

    #[googletest::test]
    fn fallback_miss_is_unresolved() {
        let translit = Transliterator::simplified_to_traditional();
        let harvested = HashMap::new();
        let fallback = FallbackSource {
            locale: "zh_CN",
            harvested: &harvested,
            transliterator: &translit,
        };

        let resolution = resolve("Foo", "zh_TW", &catalog(), Some(fallback));

        expect_that!(resolution, eq(&Resolution::Unresolved));
    }
}
