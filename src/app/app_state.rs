use std::io;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::config::{ClipboardBackend, Config};
use crate::help::HelpPopupState;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::lookup::{LookupState, SearchClient, worker};
use crate::notification::NotificationState;
use crate::picker::PickerState;
use crate::results::{AutoScroll, ResultsState};

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    Picker,
    ResultsPane,
}

impl Focus {
    /// Next pane in Tab order
    pub fn next(self) -> Self {
        match self {
            Focus::InputField => Focus::Picker,
            Focus::Picker => Focus::ResultsPane,
            Focus::ResultsPane => Focus::InputField,
        }
    }

    /// Previous pane in Tab order
    pub fn previous(self) -> Self {
        match self {
            Focus::InputField => Focus::ResultsPane,
            Focus::Picker => Focus::InputField,
            Focus::ResultsPane => Focus::Picker,
        }
    }
}

/// Application state
pub struct App {
    pub input: InputState,
    pub picker: PickerState,
    pub results: ResultsState,
    pub lookup: LookupState,
    pub auto_scroll: AutoScroll,
    pub notification: NotificationState,
    pub help: HelpPopupState,
    pub focus: Focus,
    pub layout_regions: LayoutRegions,
    pub clipboard_backend: ClipboardBackend,
    pub should_quit: bool,
}

impl App {
    /// Create the app without a lookup worker; see [`App::connect`]
    pub fn new(config: &Config) -> Self {
        Self {
            input: InputState::new(),
            picker: PickerState::new(config.picker.script),
            results: ResultsState::new(),
            lookup: LookupState::new(),
            auto_scroll: AutoScroll::new(Duration::from_millis(config.results.scroll_delay_ms)),
            notification: NotificationState::new(),
            help: HelpPopupState::new(),
            focus: Focus::InputField,
            layout_regions: LayoutRegions::new(),
            clipboard_backend: config.clipboard.backend,
            should_quit: false,
        }
    }

    /// Spawn the lookup worker for `client` and wire its channels
    pub fn connect(&mut self, client: SearchClient) -> io::Result<()> {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();

        worker::spawn_worker(client, request_rx, response_tx)?;
        self.lookup.set_channels(request_tx, response_rx);
        log::debug!("Lookup worker connected");
        Ok(())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current input text
    pub fn query(&self) -> &str {
        self.input.text()
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.input.set_focused(focus == Focus::InputField);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
