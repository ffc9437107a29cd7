// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Japanese/English classification for selected text.
//!
//! A deliberately coarse binary heuristic: any code point in the Hiragana,
//! Katakana, or CJK Unified Ideographs ranges classifies the whole text as
//! Japanese, everything else as English. No confidence scoring, no
//! mixed-language handling.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The two languages the translator works between.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    Japanese,
    English,
}

impl Language {
    /// The translation target for text detected as `self`.
    pub fn opposite(self) -> Language {
        match self {
            Language::Japanese => Language::English,
            Language::English => Language::Japanese,
        }
    }
}

/// Hiragana, Katakana, or CJK Unified Ideographs up to U+9FAF.
fn is_japanese_char(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{4E00}'..='\u{9FAF}')
}

/// Classify `text` as Japanese or English.
///
/// A single Japanese code point anywhere in the text decides Japanese;
/// everything else, including empty text, is English.
pub fn detect_language(text: &str) -> Language {
    if text.chars().any(is_japanese_char) {
        Language::Japanese
    } else {
        Language::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hiragana_detects_japanese() {
        assert_eq!(detect_language("こんにちは"), Language::Japanese);
    }

    #[test]
    fn katakana_detects_japanese() {
        assert_eq!(detect_language("コンピュータ"), Language::Japanese);
    }

    #[test]
    fn kanji_detects_japanese() {
        assert_eq!(detect_language("翻訳"), Language::Japanese);
        assert_eq!(detect_language("日本語"), Language::Japanese);
    }

    #[test]
    fn ascii_detects_english() {
        assert_eq!(detect_language("Hello, world!"), Language::English);
        assert_eq!(
            detect_language("The quick brown fox jumps over the lazy dog."),
            Language::English
        );
    }

    #[test]
    fn single_japanese_char_decides_whole_text() {
        // Mostly English with one kanji still classifies as Japanese.
        assert_eq!(
            detect_language("The character 猫 means cat"),
            Language::Japanese
        );
    }

    #[test]
    fn empty_text_is_english() {
        assert_eq!(detect_language(""), Language::English);
        assert_eq!(detect_language("   "), Language::English);
    }

    #[test]
    fn digits_and_symbols_are_english() {
        assert_eq!(detect_language("12345 !?#$%"), Language::English);
    }

    #[test]
    fn accented_latin_is_english() {
        assert_eq!(detect_language("café naïve"), Language::English);
    }

    #[test]
    fn halfwidth_katakana_is_english() {
        // U+FF66..U+FF9F fall outside the recognized ranges.
        assert_eq!(detect_language("ｶﾀｶﾅ"), Language::English);
    }

    #[test]
    fn range_boundaries() {
        // First hiragana block char and last recognized ideograph.
        assert_eq!(detect_language("\u{3040}"), Language::Japanese);
        assert_eq!(detect_language("\u{9FAF}"), Language::Japanese);
        // One past the recognized ideograph cap.
        assert_eq!(detect_language("\u{9FB0}"), Language::English);
    }

    #[test]
    fn opposite_swaps_languages() {
        assert_eq!(Language::Japanese.opposite(), Language::English);
        assert_eq!(Language::English.opposite(), Language::Japanese);
    }

    #[test]
    fn language_display_matches_prompt_tags() {
        assert_eq!(Language::Japanese.to_string(), "Japanese");
        assert_eq!(Language::English.to_string(), "English");
    }

    #[test]
    fn language_parses_case_insensitively() {
        use std::str::FromStr;

        assert_eq!(Language::from_str("japanese").unwrap(), Language::Japanese);
        assert_eq!(Language::from_str("English").unwrap(), Language::English);
        assert!(Language::from_str("german").is_err());
    }

    #[test]
    fn language_serializes_as_plain_string() {
        let json = serde_json::to_string(&Language::Japanese).unwrap();
        assert_eq!(json, "\"Japanese\"");
        let parsed: Language = serde_json::from_str("\"English\"").unwrap();
        assert_eq!(parsed, Language::English);
    }
}
