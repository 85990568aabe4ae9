use crate::character::EnrichedCharacter;
use crate::lookup::Lookup;
use crate::scroll::ScrollState;

/// Lines taken by the heading and the blank line after it
pub const HEADING_LINES: u32 = 2;

/// Lines per record: name, three detail rows, separator
pub const RECORD_LINES: u32 = 5;

/// Records from the most recent completed lookup
///
/// The target and the records are always replaced together so the heading
/// never names a different search than the list below it.
#[derive(Debug, Clone, Default)]
pub struct ResultsState {
    target: Option<String>,
    characters: Vec<EnrichedCharacter>,
    selected: usize,
    pub scroll: ScrollState,
}

impl ResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole result set with a completed lookup
    pub fn replace(&mut self, lookup: Lookup) {
        self.target = Some(lookup.target);
        self.characters = lookup.characters;
        self.selected = 0;
        self.scroll.reset();
    }

    /// Target of the lookup these results came from
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn characters(&self) -> &[EnrichedCharacter] {
        &self.characters
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether any lookup has completed yet
    pub fn has_searched(&self) -> bool {
        self.target.is_some()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_character(&self) -> Option<&EnrichedCharacter> {
        self.characters.get(self.selected)
    }

    /// Total rendered lines, used for scroll bounds
    pub fn content_lines(&self) -> u32 {
        if self.characters.is_empty() {
            return 0;
        }
        HEADING_LINES + self.characters.len() as u32 * RECORD_LINES
    }

    /// First rendered line of record `index`
    pub fn record_line(index: usize) -> u32 {
        HEADING_LINES + index as u32 * RECORD_LINES
    }

    pub fn select(&mut self, index: usize) {
        if self.characters.is_empty() {
            return;
        }
        self.selected = index.min(self.characters.len() - 1);
        self.reveal_selected();
    }

    pub fn select_next(&mut self) {
        self.select(self.selected.saturating_add(1));
    }

    pub fn select_previous(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }

    pub fn select_first(&mut self) {
        self.select(0);
        self.scroll.jump_to_top();
    }

    pub fn select_last(&mut self) {
        self.select(self.characters.len().saturating_sub(1));
    }

    /// Bring the heading and first record into view
    pub fn scroll_to_heading(&mut self) {
        self.selected = 0;
        self.scroll.jump_to_top();
    }

    fn reveal_selected(&mut self) {
        let start = Self::record_line(self.selected);
        // The trailing separator line may stay hidden
        self.scroll
            .ensure_range_visible(start, (RECORD_LINES - 1) as u16);
    }
}

#[cfg(test)]
#[path = "results_state_tests.rs"]
mod results_state_tests;
