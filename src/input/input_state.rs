use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

pub const INPUT_TITLE: &str = " Select or Enter Character ";

/// Single-line search input
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("e.g. 愛");

        let mut input = Self { textarea };
        input.set_focused(true);
        input
    }

    /// Current input text
    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Replace the input text, leaving the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(text);
    }

    pub fn set_focused(&mut self, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(INPUT_TITLE)
                .border_style(Style::default().fg(border_color)),
        );
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        assert_eq!(InputState::new().text(), "");
    }

    #[test]
    fn test_set_text_replaces_content() {
        let mut input = InputState::new();
        input.textarea.insert_str("水");
        input.set_text("愛");
        assert_eq!(input.text(), "愛");
    }

    #[test]
    fn test_set_text_with_cursor_mid_line() {
        let mut input = InputState::new();
        input.textarea.insert_str("abc");
        input.textarea.move_cursor(CursorMove::Head);
        input.set_text("あ");
        assert_eq!(input.text(), "あ");
        assert_eq!(input.textarea.cursor(), (0, 1));
    }

    #[test]
    fn test_set_text_empty_clears() {
        let mut input = InputState::new();
        input.textarea.insert_str("abc");
        input.set_text("");
        assert_eq!(input.text(), "");
    }
}
