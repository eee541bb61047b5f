//! # Feedback Component
//!
//! Shown once the current question has been answered: a green or red badge
//! with the verdict, and below it the button that moves on. The button reads
//! "Next Question" while more questions follow and "Results" on the last one,
//! so answering the final question never jumps straight to the summary.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::Component;
use crate::tui::components::button::{BUTTON_HEIGHT, Button, text_width};

const BADGE_HEIGHT: u16 = 5;
const BADGE_MIN_WIDTH: u16 = 22;
const SPACER: u16 = 1;

pub struct Feedback<'a> {
    pub correct: bool,
    /// "Correct Answer" or "Wrong Answer"
    pub verdict: &'a str,
    /// "Next Question" or "Results"
    pub button_label: &'a str,
}

impl<'a> Feedback<'a> {
    pub fn new(correct: bool, verdict: &'a str, button_label: &'a str) -> Self {
        Self {
            correct,
            verdict,
            button_label,
        }
    }

    fn color(&self) -> Color {
        if self.correct { Color::Green } else { Color::Red }
    }
}

impl<'a> Component for Feedback<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [badge_row, _, button_row] = Layout::vertical([
            Constraint::Length(BADGE_HEIGHT),
            Constraint::Length(SPACER),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .areas(area);

        let badge_width = text_width(self.verdict)
            .saturating_add(6)
            .max(BADGE_MIN_WIDTH);
        let [badge_area] = Layout::horizontal([Constraint::Length(badge_width)])
            .flex(Flex::Center)
            .areas(badge_row);

        let badge = Paragraph::new(self.verdict)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(self.color())
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .padding(Padding::vertical(1)),
            );
        frame.render_widget(badge, badge_area);

        let mut button = Button::new(self.button_label, "Enter", Color::Cyan);
        let button_width = button.min_width().saturating_add(4);
        let [button_area] = Layout::horizontal([Constraint::Length(button_width)])
            .flex(Flex::Center)
            .areas(button_row);
        button.render(frame, button_area);
    }

    fn height(&self, _width: u16) -> u16 {
        BADGE_HEIGHT + SPACER + BUTTON_HEIGHT
    }
}
