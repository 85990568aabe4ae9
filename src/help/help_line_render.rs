//! Help line rendering
//!
//! This module handles rendering of the help line at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::Focus;

/// Short key reference for the focused pane
pub fn help_text(focus: Focus) -> &'static str {
    match focus {
        Focus::InputField => " F1: Help | Enter: Search | Tab: Next Pane | Esc: Kana Chart",
        Focus::Picker => " F1/?: Help | Enter: Search Kana | s: Hiragana/Katakana | Tab: Next Pane | q: Quit",
        Focus::ResultsPane => " F1/?: Help | j/k: Select | o: Open Image | y: Copy Romaji | Tab: Next Pane | q: Quit",
    }
}

/// Render the help line (bottom of screen)
pub fn render_line(focus: Focus, frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(help_text(focus)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
