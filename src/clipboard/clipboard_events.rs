use crate::app::App;

use super::backend::copy_to_clipboard;

/// Which field of the selected record to copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyField {
    Romaji,
    Name,
}

impl CopyField {
    fn label(self) -> &'static str {
        match self {
            CopyField::Romaji => "romaji",
            CopyField::Name => "name",
        }
    }
}

/// Copy a field of the selected result; returns true on success
pub fn copy_selected(app: &mut App, field: CopyField) -> bool {
    let Some(character) = app.results.selected_character() else {
        return false;
    };

    let text = match field {
        CopyField::Romaji => character.romaji.clone(),
        CopyField::Name => character.name().to_string(),
    };

    if text.is_empty() {
        app.notification
            .show_error(&format!("No {} to copy", field.label()));
        return false;
    }

    match copy_to_clipboard(&text, app.clipboard_backend) {
        Ok(()) => {
            app.notification.show(&format!("Copied {}!", field.label()));
            true
        }
        Err(e) => {
            log::warn!("Clipboard copy failed: {}", e);
            app.notification.show_error(&format!("Copy failed: {}", e));
            false
        }
    }
}

#[cfg(test)]
#[path = "clipboard_events_tests.rs"]
mod clipboard_events_tests;
