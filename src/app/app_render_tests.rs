//! Tests for app/app_render

use super::*;
use crate::test_utils::test_helpers::{app_with_channels, characters, lookup, test_app};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::time::Instant;

fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_initial_screen() {
    let mut app = test_app();

    let output = render_to_string(&mut app, 80, 30);

    assert!(output.contains("Character Learner"));
    assert!(output.contains("Select or Enter Character"));
    assert!(output.contains("Hiragana"));
    assert!(output.contains("Enter a character or pick one from the chart."));
}

#[test]
fn test_results_render_with_heading() {
    let mut app = test_app();
    app.apply_outcome(Ok(lookup("愛", characters(2))), Instant::now());

    let output = render_to_string(&mut app, 80, 30);

    assert!(output.contains("愛 Matching Characters"));
    assert!(output.contains("Character 1"));
    assert!(output.contains("Character 2"));
}

#[test]
fn test_pending_search_shown_in_title() {
    let (mut app, _request_rx, _response_tx) = app_with_channels();
    app.select_character("水");

    let output = render_to_string(&mut app, 80, 30);

    assert!(output.contains("searching 水"));
}

#[test]
fn test_render_records_layout_regions() {
    let mut app = test_app();

    render_to_string(&mut app, 80, 30);

    let regions = app.layout_regions;
    assert!(regions.input_field.is_some());
    assert!(regions.picker.is_some());
    assert!(regions.picker_inner.is_some());
    assert!(regions.results_pane.is_some());
    assert_eq!(regions.picker.unwrap().width, PICKER_WIDTH);
}

#[test]
fn test_help_popup_renders_on_top() {
    let mut app = test_app();
    app.help.toggle();

    let output = render_to_string(&mut app, 80, 40);

    assert!(output.contains("Toggle this help"));
}

#[test]
fn test_notification_renders() {
    let mut app = test_app();
    app.notification.show("Copied romaji!");

    let output = render_to_string(&mut app, 80, 30);

    assert!(output.contains("Copied romaji!"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = test_app();
    app.apply_outcome(Ok(lookup("愛", characters(3))), Instant::now());
    app.help.toggle();
    app.notification.show_error("Search failed");

    render_to_string(&mut app, 10, 4);
}
