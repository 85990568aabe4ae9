use super::chart::{CHART_COLUMNS, CHART_ROWS, kana_at};
use crate::config::PickerScript;

/// Cursor and script for the kana chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    pub script: PickerScript,
    row: usize,
    col: usize,
    /// First chart row drawn; maintained by the renderer
    pub scroll_offset: usize,
}

impl PickerState {
    pub fn new(script: PickerScript) -> Self {
        Self {
            script,
            row: 0,
            col: 0,
            scroll_offset: 0,
        }
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Kana under the cursor
    pub fn current(&self) -> Option<char> {
        kana_at(self.script, self.row, self.col)
    }

    pub fn toggle_script(&mut self) {
        self.script = match self.script {
            PickerScript::Hiragana => PickerScript::Katakana,
            PickerScript::Katakana => PickerScript::Hiragana,
        };
    }

    /// Move the cursor to a cell; returns false for gaps
    pub fn move_to(&mut self, row: usize, col: usize) -> bool {
        if kana_at(self.script, row, col).is_none() {
            return false;
        }
        self.row = row;
        self.col = col;
        true
    }

    pub fn move_left(&mut self) {
        if let Some(col) = (0..self.col)
            .rev()
            .find(|&c| kana_at(self.script, self.row, c).is_some())
        {
            self.col = col;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(col) =
            (self.col + 1..CHART_COLUMNS).find(|&c| kana_at(self.script, self.row, c).is_some())
        {
            self.col = col;
        }
    }

    pub fn move_up(&mut self) {
        if let Some(row) = (0..self.row).rev().find(|&r| self.row_has_cell(r)) {
            self.row = row;
            self.col = self.nearest_col(row);
        }
    }

    pub fn move_down(&mut self) {
        if let Some(row) = (self.row + 1..CHART_ROWS).find(|&r| self.row_has_cell(r)) {
            self.row = row;
            self.col = self.nearest_col(row);
        }
    }

    /// Keep the cursor row inside a viewport of `visible_rows`
    pub fn ensure_cursor_visible(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        if self.row < self.scroll_offset {
            self.scroll_offset = self.row;
        } else if self.row >= self.scroll_offset + visible_rows {
            self.scroll_offset = self.row + 1 - visible_rows;
        }
        let max_offset = CHART_ROWS.saturating_sub(visible_rows);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    fn row_has_cell(&self, row: usize) -> bool {
        (0..CHART_COLUMNS).any(|c| kana_at(self.script, row, c).is_some())
    }

    /// Closest filled column in `row` to the current column
    fn nearest_col(&self, row: usize) -> usize {
        (0..CHART_COLUMNS)
            .filter(|&c| kana_at(self.script, row, c).is_some())
            .min_by_key(|&c| c.abs_diff(self.col))
            .unwrap_or(0)
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new(PickerScript::default())
    }
}

#[cfg(test)]
#[path = "picker_state_tests.rs"]
mod picker_state_tests;
