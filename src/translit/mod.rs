//! Deterministic character-level script conversion.
//!
//! Used as the fallback mechanism for derived locales: when a phrase has no
//! direct translation, the fallback locale's text is converted character by
//! character (e.g. simplified→traditional Chinese). This is transliteration,
//! not translation — a pure finite lookup with no language inference.

mod table;

use std::collections::HashMap;

/// Converts text through a fixed character mapping.
///
/// Characters without a mapping entry pass through unchanged, so the
/// conversion is total over all input and preserves the character count.
#[derive(Debug, Clone)]
pub struct Transliterator {
    table: HashMap<char, char>,
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::simplified_to_traditional()
    }
}

impl Transliterator {
    /// Builds the simplified→traditional Chinese converter.
    #[must_use]
    pub fn simplified_to_traditional() -> Self {
        Self::from_pairs(table::S2T_PAIRS)
    }

    /// Builds a converter from explicit character pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(char, char)]) -> Self {
        Self { table: pairs.iter().copied().collect() }
    }

    /// Converts `text` one character at a time.
    ///
    /// The result always has the same number of characters as the input;
    /// repeated calls with the same input produce the same output.
    #[must_use]
    pub fn convert(&self, text: &str) -> String {
        text.chars().map(|c| self.table.get(&c).copied().unwrap_or(c)).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[googletest::test]
    fn convert_maps_known_characters() {
        let translit = Transliterator::simplified_to_traditional();

        expect_that!(translit.convert("网络"), eq("網絡"));
        expect_that!(translit.convert("简体语"), eq("簡體語"));
    }

    #[googletest::test]
    fn convert_passes_unknown_characters_through() {
        let translit = Transliterator::simplified_to_traditional();

        expect_that!(translit.convert("Hello, world!"), eq("Hello, world!"));
        // Mixed input: only the mapped characters change.
        expect_that!(translit.convert("已用 %1%"), eq("已用 %1%"));
        expect_that!(translit.convert("到期：%1"), eq("到期：%1"));
    }

    #[googletest::test]
    fn convert_empty_string() {
        let translit = Transliterator::simplified_to_traditional();

        expect_that!(translit.convert(""), eq(""));
    }

    #[rstest]
    #[case("")]
    #[case("网络")]
    #[case("点击切换服务器")]
    #[case("Plain ASCII")]
    #[case("Пароль")]
    fn convert_preserves_char_count(#[case] input: &str) {
        let translit = Transliterator::simplified_to_traditional();

        let converted = translit.convert(input);

        assert_eq!(converted.chars().count(), input.chars().count());
    }

    #[googletest::test]
    fn convert_is_deterministic() {
        let translit = Transliterator::simplified_to_traditional();

        expect_that!(translit.convert("密码重置成功"), eq(&translit.convert("密码重置成功")));
    }

    #[googletest::test]
    fn from_pairs_uses_custom_table() {
        let translit = Transliterator::from_pairs(&[('a', 'b')]);

        expect_that!(translit.convert("aaa"), eq("bbb"));
        expect_that!(translit.convert("xyz"), eq("xyz"));
    }
}
