//! Results pane rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::results_state::ResultsState;
use crate::character::EnrichedCharacter;

const SELECTED_MARKER: &str = "▶ ";
const UNSELECTED_MARKER: &str = "  ";

/// Heading shown above a non-empty result list
pub fn heading_text(target: &str) -> String {
    format!("{} Matching Characters", target)
}

/// Render the results pane
///
/// `pending` is the target of an in-flight search, if any.
pub fn render_results(
    results: &mut ResultsState,
    pending: Option<&str>,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let title = match pending {
        Some(target) => format!(" Results · searching {} ", target),
        None if !results.is_empty() => format!(" Results ({}) ", results.len()),
        None => " Results ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    results
        .scroll
        .update_bounds(results.content_lines(), inner.height);

    let lines = if results.is_empty() {
        placeholder_lines(results, pending)
    } else {
        result_lines(results, focused)
    };

    let content = Paragraph::new(lines)
        .block(block)
        .scroll((results.scroll.offset, 0));
    frame.render_widget(content, area);
}

fn placeholder_lines(results: &ResultsState, pending: Option<&str>) -> Vec<Line<'static>> {
    let text = match pending {
        Some(target) => format!("Searching for {}…", target),
        None if results.has_searched() => "No matching characters.".to_string(),
        None => "Enter a character or pick one from the chart.".to_string(),
    };
    vec![Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    ))]
}

fn result_lines(results: &ResultsState, focused: bool) -> Vec<Line<'_>> {
    let mut lines = Vec::with_capacity(results.content_lines() as usize);

    let target = results.target().unwrap_or_default();
    lines.push(Line::from(Span::styled(
        heading_text(target),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    for (index, character) in results.characters().iter().enumerate() {
        let selected = focused && index == results.selected_index();
        lines.extend(record_lines(character, selected));
    }

    lines
}

/// One record block: name, detail rows, separator
fn record_lines(character: &EnrichedCharacter, selected: bool) -> Vec<Line<'_>> {
    let marker = if selected {
        SELECTED_MARKER
    } else {
        UNSELECTED_MARKER
    };
    let name_style = if selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(marker),
        Span::styled(character.name(), name_style),
    ])];

    for (label, value) in character.detail_lines() {
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
            Span::raw(value),
        ]));
    }

    lines.push(Line::default());
    lines
}

#[cfg(test)]
#[path = "results_render_tests.rs"]
mod results_render_tests;
