//! Kana chart rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthChar;

use super::chart::{CHART_COLUMNS, CHART_ROWS, kana_at};
use super::picker_state::PickerState;
use crate::config::PickerScript;

/// Terminal columns per chart cell
pub const CELL_WIDTH: u16 = 4;

/// Picker width including borders
pub const PICKER_WIDTH: u16 = CELL_WIDTH * CHART_COLUMNS as u16 + 2;

/// Render the chart and return the inner area used for hit-testing
pub fn render_picker(
    picker: &mut PickerState,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) -> Rect {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let title = match picker.script {
        PickerScript::Hiragana => " Hiragana ",
        PickerScript::Katakana => " Katakana ",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    picker.ensure_cursor_visible(inner.height as usize);

    let (cursor_row, cursor_col) = picker.cursor();
    let lines: Vec<Line> = (picker.scroll_offset..CHART_ROWS)
        .take(inner.height as usize)
        .map(|row| {
            let spans: Vec<Span> = (0..CHART_COLUMNS)
                .map(|col| {
                    let style = if (row, col) == (cursor_row, cursor_col) {
                        cursor_style(focused)
                    } else {
                        Style::default()
                    };
                    Span::styled(cell_text(kana_at(picker.script, row, col)), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
    inner
}

/// Chart cell under a screen position
pub fn cell_at(picker: &PickerState, inner: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
    if x < inner.x || y < inner.y || x >= inner.x + inner.width || y >= inner.y + inner.height {
        return None;
    }

    let row = picker.scroll_offset + (y - inner.y) as usize;
    let col = ((x - inner.x) / CELL_WIDTH) as usize;
    if row >= CHART_ROWS || col >= CHART_COLUMNS {
        return None;
    }
    Some((row, col))
}

/// Center a kana in a fixed-width cell
fn cell_text(kana: Option<char>) -> String {
    let Some(kana) = kana else {
        return " ".repeat(CELL_WIDTH as usize);
    };

    let width = kana.width().unwrap_or(1) as u16;
    let padding = CELL_WIDTH.saturating_sub(width);
    let left = padding / 2;
    let right = padding - left;
    format!(
        "{}{}{}",
        " ".repeat(left as usize),
        kana,
        " ".repeat(right as usize)
    )
}

fn cursor_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::UNDERLINED)
    }
}

#[cfg(test)]
#[path = "picker_render_tests.rs"]
mod picker_render_tests;
