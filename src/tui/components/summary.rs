//! # Summary Component
//!
//! The closing screen: "Quiz Complete!", the final score and the restart
//! button, centered as one group.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::button::{BUTTON_HEIGHT, Button};

pub struct Summary<'a> {
    pub heading: &'a str,
    pub score_line: String,
    pub restart_label: &'a str,
}

impl<'a> Summary<'a> {
    pub fn new(heading: &'a str, score_line: String, restart_label: &'a str) -> Self {
        Self {
            heading,
            score_line,
            restart_label,
        }
    }
}

impl<'a> Component for Summary<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [heading_area, _, score_area, _, button_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1), // Spacer
            Constraint::Length(1),
            Constraint::Length(2), // Spacer
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .flex(Flex::Center)
        .areas(area);

        let heading = Paragraph::new(Line::from(Span::styled(
            self.heading,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(heading, heading_area);

        let score = Paragraph::new(self.score_line.as_str()).alignment(Alignment::Center);
        frame.render_widget(score, score_area);

        let mut button = Button::new(self.restart_label, "r", Color::Cyan);
        let button_width = button.min_width().saturating_add(4);
        let [button_area] = Layout::horizontal([Constraint::Length(button_width)])
            .flex(Flex::Center)
            .areas(button_row);
        button.render(frame, button_area);
    }

    fn height(&self, _width: u16) -> u16 {
        1 + 1 + 1 + 2 + BUTTON_HEIGHT
    }
}
