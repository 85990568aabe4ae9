use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::clipboard::clipboard_events::{self, CopyField};

/// Handle a key while the results pane has focus; returns true if consumed
pub fn handle_results_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.results.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.results.select_previous(),
        KeyCode::Home | KeyCode::Char('g') => app.results.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.results.select_last(),
        KeyCode::PageDown => app.results.scroll.page_down(),
        KeyCode::PageUp => app.results.scroll.page_up(),
        KeyCode::Char('o') => {
            open_selected_image(app);
        }
        KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            clipboard_events::copy_selected(app, CopyField::Name);
        }
        KeyCode::Char('y') => {
            clipboard_events::copy_selected(app, CopyField::Romaji);
        }
        _ => return false,
    }
    true
}

/// Open the selected record's image in the system viewer
fn open_selected_image(app: &mut App) -> bool {
    let Some(url) = app
        .results
        .selected_character()
        .map(|c| c.img_url().to_string())
    else {
        return false;
    };

    if url.is_empty() {
        app.notification.show_error("No image for this character");
        return false;
    }

    match open::that(&url) {
        Ok(()) => {
            app.notification.show("Opening image…");
            true
        }
        Err(e) => {
            log::warn!("Failed to open {}: {}", url, e);
            app.notification.show_error(&format!("Could not open image: {}", e));
            false
        }
    }
}

#[cfg(test)]
#[path = "results_events_tests.rs"]
mod results_events_tests;
