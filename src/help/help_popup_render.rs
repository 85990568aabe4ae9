//! Help popup rendering
//!
//! Draws the keyboard shortcut table as a centered modal. The section for
//! the focused pane is marked so the relevant keys are easy to find.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::HelpPopupState;
use crate::app::Focus;
use crate::help::{HELP_ENTRIES, HELP_FOOTER};
use crate::widgets::popup;

// Help popup display constants
pub const HELP_POPUP_WIDTH: u16 = 64;
pub const HELP_POPUP_PADDING: u16 = 4; // borders (2) + footer (2)

const ACTIVE_SECTION_MARKER: &str = "▶ ";

/// Section header describing the keys of `focus`
fn section_for(focus: Focus) -> &'static str {
    match focus {
        Focus::InputField => "INPUT",
        Focus::Picker => "KANA CHART",
        Focus::ResultsPane => "RESULTS",
    }
}

/// Styled help lines, with the focused pane's section marked
pub fn help_lines(focus: Focus) -> Vec<Line<'static>> {
    let active_section = section_for(focus);
    let mut lines: Vec<Line> = Vec::with_capacity(HELP_ENTRIES.len() + 2);

    for (key, desc) in HELP_ENTRIES {
        if key.is_empty() && desc.is_empty() {
            // Spacer between sections
            lines.push(Line::from(""));
        } else if key.is_empty() {
            // Category header; the active one is marked and highlighted
            let (marker, color) = if *desc == active_section {
                (ACTIVE_SECTION_MARKER, Color::Yellow)
            } else {
                ("  ", Color::Cyan)
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    *desc,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]));
        } else {
            let key_span = Span::styled(
                format!("  {:<15}", key),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
            let desc_span = Span::styled(*desc, Style::default().fg(Color::White));
            lines.push(Line::from(vec![key_span, desc_span]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", HELP_FOOTER),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

/// Render the help popup (centered modal with keyboard shortcuts)
pub fn render_popup(help: &mut HelpPopupState, focus: Focus, frame: &mut Frame) {
    let frame_area = frame.area();

    // Don't render if terminal is too small
    if frame_area.width < 20 || frame_area.height < 10 {
        return;
    }

    // Clamp the ideal size to the frame
    let ideal_popup_height = HELP_ENTRIES.len() as u16 + HELP_POPUP_PADDING;
    let popup_width = HELP_POPUP_WIDTH.min(frame_area.width);
    let popup_height = ideal_popup_height.min(frame_area.height);

    let popup_area = popup::centered_popup(frame_area, popup_width, popup_height);
    popup::clear_area(frame, popup_area);

    let lines = help_lines(focus);

    // Scroll bounds follow the visible height inside the borders
    let content_height = lines.len() as u32;
    let visible_height = popup_height.saturating_sub(2);
    help.scroll.update_bounds(content_height, visible_height);

    let widget = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard Shortcuts ")
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .scroll((help.scroll.offset, 0));

    frame.render_widget(widget, popup_area);
}

#[cfg(test)]
#[path = "help_popup_render_tests.rs"]
mod help_popup_render_tests;
