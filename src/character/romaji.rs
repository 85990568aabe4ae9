use wana_kana::ConvertJapanese;

/// Convert Japanese phonetic script to its romanized reading
///
/// Kanji and Latin text pass through unchanged, so converting an already
/// romanized string yields the same string.
pub fn to_romaji(text: &str) -> String {
    text.to_romaji()
}

#[cfg(test)]
#[path = "romaji_tests.rs"]
mod romaji_tests;
