//! Kana chart key handling

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::picker_state::PickerState;

/// What a key press in the picker asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    /// The key was consumed by the picker
    Handled,
    /// The user chose this kana
    Select(char),
    /// Not a picker key
    Ignored,
}

pub fn handle_picker_key(picker: &mut PickerState, key: KeyEvent) -> PickerAction {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => picker.move_left(),
        KeyCode::Right | KeyCode::Char('l') => picker.move_right(),
        KeyCode::Up | KeyCode::Char('k') => picker.move_up(),
        KeyCode::Down | KeyCode::Char('j') => picker.move_down(),
        KeyCode::Char('s') => picker.toggle_script(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            return match picker.current() {
                Some(kana) => PickerAction::Select(kana),
                None => PickerAction::Handled,
            };
        }
        _ => return PickerAction::Ignored,
    }
    PickerAction::Handled
}
