use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, Focus};
use crate::layout::LayoutRegions;
use crate::notification::render_notification;
use crate::picker::picker_render::{self, PICKER_WIDTH};

const APP_TITLE: &str = " Character Learner ";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let frame_area = frame.area();
        let [title_area, input_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .areas(frame_area);

        let [picker_area, results_area] =
            Layout::horizontal([Constraint::Length(PICKER_WIDTH), Constraint::Min(10)])
                .areas(body_area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                APP_TITLE,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))),
            title_area,
        );

        frame.render_widget(&self.input.textarea, input_area);

        let picker_inner = picker_render::render_picker(
            &mut self.picker,
            self.focus == Focus::Picker,
            frame,
            picker_area,
        );

        crate::results::results_render::render_results(
            &mut self.results,
            self.lookup.pending_target(),
            self.focus == Focus::ResultsPane,
            frame,
            results_area,
        );

        crate::help::help_line_render::render_line(self.focus, frame, help_area);

        self.layout_regions = LayoutRegions {
            input_field: Some(input_area),
            picker: Some(picker_area),
            picker_inner: Some(picker_inner),
            results_pane: Some(results_area),
        };

        render_notification(&self.notification, frame, frame_area);

        if self.help.visible {
            crate::help::help_popup_render::render_popup(&mut self.help, self.focus, frame);
        }
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
