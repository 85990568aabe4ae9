use crate::config::PickerScript;

pub const CHART_COLUMNS: usize = 5;
pub const CHART_ROWS: usize = 16;

// Full-width spaces mark empty cells
const HIRAGANA: [&str; CHART_ROWS] = [
    "あいうえお",
    "かきくけこ",
    "さしすせそ",
    "たちつてと",
    "なにぬねの",
    "はひふへほ",
    "まみむめも",
    "や　ゆ　よ",
    "らりるれろ",
    "わ　　　を",
    "ん　　　　",
    "がぎぐげご",
    "ざじずぜぞ",
    "だぢづでど",
    "ばびぶべぼ",
    "ぱぴぷぺぽ",
];

const KATAKANA: [&str; CHART_ROWS] = [
    "アイウエオ",
    "カキクケコ",
    "サシスセソ",
    "タチツテト",
    "ナニヌネノ",
    "ハヒフヘホ",
    "マミムメモ",
    "ヤ　ユ　ヨ",
    "ラリルレロ",
    "ワ　　　ヲ",
    "ン　　　　",
    "ガギグゲゴ",
    "ザジズゼゾ",
    "ダヂヅデド",
    "バビブベボ",
    "パピプペポ",
];

const EMPTY_CELL: char = '　';

/// Kana at a chart position, or None for gaps and out-of-range positions
pub fn kana_at(script: PickerScript, row: usize, col: usize) -> Option<char> {
    let rows = match script {
        PickerScript::Hiragana => &HIRAGANA,
        PickerScript::Katakana => &KATAKANA,
    };

    rows.get(row)?
        .chars()
        .nth(col)
        .filter(|&c| c != EMPTY_CELL)
}
