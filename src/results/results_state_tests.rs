//! Tests for results/results_state

use super::*;
use crate::test_utils::test_helpers::{characters, lookup};

fn results_with(count: usize, viewport_height: u16) -> ResultsState {
    let mut results = ResultsState::new();
    results.replace(lookup("あ", characters(count)));
    results
        .scroll
        .update_bounds(results.content_lines(), viewport_height);
    results
}

#[test]
fn test_new_is_empty_and_unsearched() {
    let results = ResultsState::new();
    assert!(results.is_empty());
    assert!(!results.has_searched());
    assert_eq!(results.target(), None);
    assert_eq!(results.content_lines(), 0);
}

#[test]
fn test_replace_sets_target_and_records() {
    let results = results_with(3, 20);
    assert_eq!(results.target(), Some("あ"));
    assert_eq!(results.len(), 3);
    assert!(results.has_searched());
}

#[test]
fn test_replace_with_empty_lookup_keeps_target() {
    let mut results = results_with(3, 20);
    results.replace(lookup("ん", vec![]));

    assert!(results.is_empty());
    assert_eq!(results.target(), Some("ん"));
    assert_eq!(results.content_lines(), 0);
}

#[test]
fn test_replace_resets_selection_and_scroll() {
    let mut results = results_with(10, 8);
    results.select_last();
    assert!(results.scroll.offset > 0);

    results.replace(lookup("い", characters(2)));

    assert_eq!(results.selected_index(), 0);
    assert_eq!(results.scroll.offset, 0);
}

#[test]
fn test_content_lines() {
    let results = results_with(3, 20);
    assert_eq!(results.content_lines(), HEADING_LINES + 3 * RECORD_LINES);
}

#[test]
fn test_select_next_stops_at_last() {
    let mut results = results_with(2, 40);
    results.select_next();
    results.select_next();
    results.select_next();
    assert_eq!(results.selected_index(), 1);
}

#[test]
fn test_select_previous_stops_at_first() {
    let mut results = results_with(2, 40);
    results.select_previous();
    assert_eq!(results.selected_index(), 0);
}

#[test]
fn test_select_on_empty_is_noop() {
    let mut results = ResultsState::new();
    results.select_next();
    assert_eq!(results.selected_index(), 0);
    assert!(results.selected_character().is_none());
}

#[test]
fn test_selecting_reveals_record() {
    let mut results = results_with(10, 8);
    results.select(5);

    let start = ResultsState::record_line(5) as u16;
    assert!(results.scroll.offset <= start);
    assert!(start + (RECORD_LINES as u16 - 1) <= results.scroll.offset + 8);
}

#[test]
fn test_scroll_to_heading() {
    let mut results = results_with(10, 8);
    results.select_last();
    results.scroll_to_heading();

    assert_eq!(results.selected_index(), 0);
    assert_eq!(results.scroll.offset, 0);
}

#[test]
fn test_selected_character_follows_selection() {
    let mut results = results_with(3, 40);
    results.select(2);
    assert_eq!(results.selected_character().map(|c| c.id()), Some(3));
}
