use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Color;

use crate::tui::component::Component;
use crate::tui::components::button::{BUTTON_HEIGHT, Button};

/// Gap between the two buttons.
const GAP: u16 = 2;

/// The True/False pair shown while the current question is unanswered.
pub struct AnswerButtons<'a> {
    pub true_label: &'a str,
    pub false_label: &'a str,
}

impl<'a> AnswerButtons<'a> {
    pub fn new(true_label: &'a str, false_label: &'a str) -> Self {
        Self {
            true_label,
            false_label,
        }
    }
}

impl<'a> Component for AnswerButtons<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [true_area, _, false_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(GAP),
            Constraint::Fill(1),
        ])
        .areas(area);

        Button::new(self.true_label, "t", Color::Green).render(frame, true_area);
        Button::new(self.false_label, "f", Color::Red).render(frame, false_area);
    }

    fn height(&self, _width: u16) -> u16 {
        BUTTON_HEIGHT
    }
}
