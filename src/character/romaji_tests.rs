//! Tests for character/romaji

use super::*;
use proptest::prelude::*;

#[test]
fn test_hiragana_pair() {
    assert_eq!(to_romaji("あい"), "ai");
}

#[test]
fn test_hiragana_word() {
    assert_eq!(to_romaji("ねこ"), "neko");
}

#[test]
fn test_katakana_is_lowercased() {
    assert_eq!(to_romaji("アイ"), "ai");
}

#[test]
fn test_already_romanized_is_unchanged() {
    assert_eq!(to_romaji("ai"), "ai");
}

#[test]
fn test_empty_input() {
    assert_eq!(to_romaji(""), "");
}

const BASIC_HIRAGANA: &[&str] = &[
    "あ", "い", "う", "え", "お", "か", "き", "く", "け", "こ", "さ", "し", "す", "せ", "そ",
    "た", "ち", "つ", "て", "と", "な", "に", "ぬ", "ね", "の", "ま", "み", "む", "め", "も",
];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_romaji_is_idempotent(
        parts in prop::collection::vec(prop::sample::select(BASIC_HIRAGANA), 1..6)
    ) {
        let kana: String = parts.concat();
        let once = to_romaji(&kana);
        let twice = to_romaji(&once);

        prop_assert_eq!(&once, &twice);
        prop_assert!(once.is_ascii(), "expected ascii reading for {}, got {}", kana, once);
    }
}
