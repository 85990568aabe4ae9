//! Tests for app/app_events

use super::*;
use crate::test_utils::test_helpers::{
    app_with_channels, characters, key, key_with_mods, lookup, sent_searches, test_app,
};
use std::time::Instant;

fn app_with_results(count: usize) -> App {
    let mut app = test_app();
    app.apply_outcome(Ok(lookup("あ", characters(count))), Instant::now());
    app.set_focus(Focus::ResultsPane);
    app
}

#[test]
fn test_typing_goes_to_input() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Char('q')));
    app.handle_key_event(key(KeyCode::Char('?')));

    assert_eq!(app.query(), "q?");
    assert!(!app.should_quit());
    assert!(!app.help.visible);
}

#[test]
fn test_enter_submits_input() {
    let (mut app, request_rx, _response_tx) = app_with_channels();
    app.input.textarea.insert_str("水");

    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(sent_searches(&request_rx), vec![(1, "水".to_string())]);
    assert_eq!(app.query(), "水");
}

#[test]
fn test_ctrl_m_does_not_add_line() {
    let mut app = test_app();
    app.input.textarea.insert_str("あ");

    app.handle_key_event(key_with_mods(KeyCode::Char('m'), KeyModifiers::CONTROL));

    assert_eq!(app.input.textarea.lines().len(), 1);
}

#[test]
fn test_tab_cycles_focus() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Picker);
    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::ResultsPane);
    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::InputField);
}

#[test]
fn test_backtab_cycles_focus_backwards() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.focus, Focus::ResultsPane);
    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.focus, Focus::Picker);
}

#[test]
fn test_esc_moves_between_input_and_picker() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Esc));
    assert_eq!(app.focus, Focus::Picker);
    app.handle_key_event(key(KeyCode::Esc));
    assert_eq!(app.focus, Focus::InputField);
}

#[test]
fn test_picker_enter_selects_kana() {
    let (mut app, request_rx, _response_tx) = app_with_channels();
    app.set_focus(Focus::Picker);

    app.handle_key_event(key(KeyCode::Right));
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.query(), "い");
    assert_eq!(sent_searches(&request_rx), vec![(1, "い".to_string())]);
}

#[test]
fn test_picker_script_toggle() {
    let (mut app, request_rx, _response_tx) = app_with_channels();
    app.set_focus(Focus::Picker);

    app.handle_key_event(key(KeyCode::Char('s')));
    app.handle_key_event(key(KeyCode::Char(' ')));

    assert_eq!(app.query(), "ア");
    assert_eq!(sent_searches(&request_rx), vec![(1, "ア".to_string())]);
}

#[test]
fn test_q_quits_outside_input() {
    let mut app = test_app();
    app.set_focus(Focus::Picker);

    app.handle_key_event(key(KeyCode::Char('q')));

    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits_from_input() {
    let mut app = test_app();

    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert!(app.should_quit());
}

#[test]
fn test_f1_toggles_help() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::F(1)));
    assert!(app.help.visible);
    app.handle_key_event(key(KeyCode::F(1)));
    assert!(!app.help.visible);
}

#[test]
fn test_help_blocks_other_keys() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::F(1)));

    app.handle_key_event(key(KeyCode::Char('x')));
    app.handle_key_event(key(KeyCode::Tab));

    assert_eq!(app.query(), "");
    assert_eq!(app.focus, Focus::InputField);

    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(!app.help.visible);
    assert!(!app.should_quit());
}

#[test]
fn test_question_mark_opens_help_outside_input() {
    let mut app = app_with_results(1);

    app.handle_key_event(key(KeyCode::Char('?')));

    assert!(app.help.visible);
}

#[test]
fn test_results_navigation() {
    let mut app = app_with_results(4);

    app.handle_key_event(key(KeyCode::Char('j')));
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.results.selected_index(), 2);

    app.handle_key_event(key(KeyCode::Char('k')));
    assert_eq!(app.results.selected_index(), 1);

    app.handle_key_event(key(KeyCode::Char('G')));
    assert_eq!(app.results.selected_index(), 3);

    app.handle_key_event(key(KeyCode::Char('g')));
    assert_eq!(app.results.selected_index(), 0);
}

#[test]
fn test_paste_into_input_strips_newlines() {
    let mut app = test_app();

    app.handle_event(Event::Paste("愛\n".to_string()));

    assert_eq!(app.query(), "愛");
}

#[test]
fn test_paste_ignored_outside_input() {
    let mut app = test_app();
    app.set_focus(Focus::Picker);

    app.handle_event(Event::Paste("愛".to_string()));

    assert_eq!(app.query(), "");
}
