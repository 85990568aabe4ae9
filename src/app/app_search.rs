use std::time::Instant;

use super::app_state::{App, Focus};
use crate::lookup::LookupOutcome;

impl App {
    /// Search for the typed text
    ///
    /// Only an empty input is rejected; whitespace is searched as typed.
    pub fn submit_search(&mut self) -> bool {
        let target = self.input.text().to_string();
        if target.is_empty() {
            return false;
        }
        self.start_lookup(&target)
    }

    /// Search for a kana picked from the chart, replacing the input text
    pub fn select_character(&mut self, character: &str) -> bool {
        self.input.set_text(character);
        self.start_lookup(character)
    }

    fn start_lookup(&mut self, target: &str) -> bool {
        match self.lookup.issue(target) {
            Some(request_id) => {
                log::debug!("Issued lookup {} for {:?}", request_id, target);
                true
            }
            None => {
                let message = if self.lookup.is_connected() {
                    "Search worker stopped"
                } else {
                    "Search service unavailable"
                };
                self.notification.show_error(message);
                false
            }
        }
    }

    /// Apply the outcome of the latest lookup
    ///
    /// A failure leaves the current results on screen.
    pub fn apply_outcome(&mut self, outcome: LookupOutcome, now: Instant) {
        match outcome {
            Ok(lookup) => {
                log::info!(
                    "Lookup for {:?} returned {} characters",
                    lookup.target,
                    lookup.characters.len()
                );
                let found = !lookup.characters.is_empty();
                self.results.replace(lookup);
                if found {
                    self.auto_scroll.schedule(now);
                } else {
                    self.auto_scroll.cancel();
                }
            }
            Err(failure) => {
                log::warn!("Lookup for {:?} failed: {}", failure.target, failure.error);
                self.notification
                    .show_error(&format!("Search failed: {}", failure.error));
            }
        }
    }

    /// Advance time-driven state: lookup responses, auto-scroll, notifications
    pub fn tick(&mut self, now: Instant) {
        if let Some(outcome) = self.lookup.poll() {
            self.apply_outcome(outcome, now);
        }

        if self.auto_scroll.fire(now) {
            self.scroll_to_results();
        }

        self.notification.expire(now);
    }

    /// Move focus to the results and bring their heading into view
    pub fn scroll_to_results(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.set_focus(Focus::ResultsPane);
        self.results.scroll_to_heading();
    }
}

#[cfg(test)]
#[path = "app_search_tests.rs"]
mod app_search_tests;
