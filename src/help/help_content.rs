/// Help entries: (key, description). An empty key marks a category header;
/// an empty pair is a spacer line.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "GLOBAL"),
    ("F1 / ?", "Toggle this help"),
    ("Tab", "Focus next pane (Input → Chart → Results)"),
    ("Shift+Tab", "Focus previous pane"),
    ("Ctrl+C", "Quit"),
    ("q", "Quit (outside the input field)"),
    ("", ""),
    ("", "INPUT"),
    ("Enter", "Search for the typed character"),
    ("Esc", "Move to the kana chart"),
    ("", ""),
    ("", "KANA CHART"),
    ("←↓↑→ / hjkl", "Move the cursor"),
    ("Enter / Space", "Search for the kana under the cursor"),
    ("s", "Switch hiragana / katakana"),
    ("Esc", "Back to the input field"),
    ("Click", "Search for the clicked kana"),
    ("", ""),
    ("", "RESULTS"),
    ("j/k or ↓/↑", "Next/previous character"),
    ("g/G", "First/last character"),
    ("PgDn/PgUp", "Scroll half a page"),
    ("o", "Open the character's image"),
    ("y", "Copy the romaji name"),
    ("Ctrl+Y", "Copy the display name"),
];

pub const HELP_FOOTER: &str = "Press F1, ? or Esc to close";
