//! Mouse handling
//!
//! Clicks change focus between panes; a click on a chart cell searches for
//! that kana. The wheel scrolls the pane under the pointer.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::{App, Focus};
use crate::layout::{Region, region_at};
use crate::picker::picker_render::cell_at;

const WHEEL_LINES: u16 = 3;

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if self.help.visible {
            return;
        }

        let region = region_at(&self.layout_regions, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                handle_click(self, region, mouse.column, mouse.row);
            }
            MouseEventKind::ScrollDown if region == Some(Region::ResultsPane) => {
                self.results.scroll.scroll_down(WHEEL_LINES);
            }
            MouseEventKind::ScrollUp if region == Some(Region::ResultsPane) => {
                self.results.scroll.scroll_up(WHEEL_LINES);
            }
            _ => {}
        }
    }
}

/// Handle a left click at (`x`, `y`) inside `region`
pub fn handle_click(app: &mut App, region: Option<Region>, x: u16, y: u16) {
    match region {
        Some(Region::InputField) => app.set_focus(Focus::InputField),
        Some(Region::ResultsPane) => app.set_focus(Focus::ResultsPane),
        Some(Region::Picker) => click_picker(app, x, y),
        None => {}
    }
}

fn click_picker(app: &mut App, x: u16, y: u16) {
    app.set_focus(Focus::Picker);

    let Some(inner) = app.layout_regions.picker_inner else {
        return;
    };
    let Some((row, col)) = cell_at(&app.picker, inner, x, y) else {
        return;
    };

    if app.picker.move_to(row, col)
        && let Some(kana) = app.picker.current()
    {
        app.select_character(&kana.to_string());
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
