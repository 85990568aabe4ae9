use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::{App, Focus};
use crate::picker::picker_events::{self, PickerAction};
use crate::results::results_events;

impl App {
    /// Route a terminal event to the focused pane
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::Picker => self.handle_picker_key(key),
            Focus::ResultsPane => {
                results_events::handle_results_key(self, key);
            }
        }
    }

    /// Pasted text goes into the input field as a single line
    pub fn handle_paste_event(&mut self, text: String) {
        if self.focus != Focus::InputField {
            return;
        }
        let line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        self.input.textarea.insert_str(line);
    }

    /// Returns true if the key was handled regardless of focus
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Help popup swallows every key while open
        if self.help.visible {
            match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.help.close();
                }
                KeyCode::Char('j') | KeyCode::Down => self.help.scroll.scroll_down(1),
                KeyCode::Char('k') | KeyCode::Up => self.help.scroll.scroll_up(1),
                KeyCode::PageDown => self.help.scroll.page_down(),
                KeyCode::PageUp => self.help.scroll.page_up(),
                KeyCode::Char('g') | KeyCode::Home => self.help.scroll.jump_to_top(),
                KeyCode::Char('G') | KeyCode::End => self.help.scroll.jump_to_bottom(),
                _ => {}
            }
            return true;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        match key.code {
            KeyCode::F(1) => {
                self.help.toggle();
                true
            }
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                true
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.previous());
                true
            }
            // Plain characters belong to the input field while it has focus
            KeyCode::Char('q') if self.focus != Focus::InputField => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('?') if self.focus != Focus::InputField => {
                self.help.toggle();
                true
            }
            _ => false,
        }
    }

    fn handle_input_field_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.submit_search();
            }
            KeyCode::Esc => self.set_focus(Focus::Picker),
            // tui-textarea maps these to newline
            KeyCode::Char('m') | KeyCode::Char('j')
                if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            _ => {
                self.input.textarea.input(key);
            }
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.set_focus(Focus::InputField);
            return;
        }

        if let PickerAction::Select(kana) = picker_events::handle_picker_key(&mut self.picker, key) {
            self.select_character(&kana.to_string());
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
