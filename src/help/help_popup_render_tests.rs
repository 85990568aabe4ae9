//! Tests for help/help_popup_render

use super::*;
use ratatui::{Terminal, backend::TestBackend};

fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

fn marked_sections(focus: Focus) -> Vec<String> {
    help_lines(focus)
        .iter()
        .map(line_text)
        .filter(|text| text.starts_with(ACTIVE_SECTION_MARKER))
        .collect()
}

#[test]
fn test_focused_section_is_marked() {
    assert_eq!(marked_sections(Focus::InputField), vec!["▶ INPUT"]);
    assert_eq!(marked_sections(Focus::Picker), vec!["▶ KANA CHART"]);
    assert_eq!(marked_sections(Focus::ResultsPane), vec!["▶ RESULTS"]);
}

#[test]
fn test_every_focus_has_a_section() {
    for focus in [Focus::InputField, Focus::Picker, Focus::ResultsPane] {
        let header = section_for(focus);
        assert!(
            HELP_ENTRIES
                .iter()
                .any(|(key, desc)| key.is_empty() && *desc == header),
            "no help section named {}",
            header
        );
    }
}

#[test]
fn test_footer_is_last_line() {
    let lines = help_lines(Focus::InputField);
    assert!(line_text(lines.last().unwrap()).contains(HELP_FOOTER));
}

#[test]
fn test_render_sets_scroll_bounds_when_clipped() {
    let mut help = HelpPopupState::new();
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();

    terminal
        .draw(|f| render_popup(&mut help, Focus::Picker, f))
        .unwrap();

    assert!(help.scroll.max_offset > 0);
    let output = terminal.backend().to_string();
    assert!(output.contains("Keyboard Shortcuts"));
}

#[test]
fn test_too_small_terminal_renders_nothing() {
    let mut help = HelpPopupState::new();
    let mut terminal = Terminal::new(TestBackend::new(15, 8)).unwrap();

    terminal
        .draw(|f| render_popup(&mut help, Focus::InputField, f))
        .unwrap();

    assert!(!terminal.backend().to_string().contains("Keyboard Shortcuts"));
}
