use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::notification_state::{NotificationKind, NotificationState};

const MAX_WIDTH: u16 = 60;

/// Draw the current notification in the top-right corner of `frame_area`
pub fn render_notification(state: &NotificationState, frame: &mut Frame, frame_area: Rect) {
    let Some(notification) = state.current() else {
        return;
    };

    let color = match notification.kind {
        NotificationKind::Info => Color::Green,
        NotificationKind::Error => Color::Red,
    };

    let text_width = notification.message.width().min(u16::MAX as usize) as u16;
    let width = text_width
        .saturating_add(4)
        .min(MAX_WIDTH)
        .min(frame_area.width);
    let inner_width = width.saturating_sub(4).max(1);
    let height = text_width
        .div_ceil(inner_width)
        .saturating_add(2)
        .min(frame_area.height);

    let area = Rect {
        x: frame_area.x + frame_area.width.saturating_sub(width.saturating_add(1)),
        y: frame_area.y + 1,
        width,
        height,
    }
    .intersection(frame_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let content = Paragraph::new(notification.message.as_str())
        .block(block)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(content, area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
