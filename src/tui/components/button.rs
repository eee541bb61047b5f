use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub const BUTTON_HEIGHT: u16 = 3;

/// Display width of `text` in cells, clamped to what a `Rect` can hold.
pub fn text_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

/// A rounded, bordered label with the key that triggers it, e.g. `True  [t]`.
pub struct Button<'a> {
    pub label: &'a str,
    pub key_hint: &'a str,
    pub color: Color,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, key_hint: &'a str, color: Color) -> Self {
        Self {
            label,
            key_hint,
            color,
        }
    }

    /// Width needed to show label, hint and borders on one line.
    pub fn min_width(&self) -> u16 {
        text_width(self.label)
            .saturating_add(text_width(self.key_hint))
            .saturating_add(6)
    }
}

impl<'a> Component for Button<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                self.label,
                Style::default().fg(self.color).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", self.key_hint),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(self.color)),
        );
        frame.render_widget(paragraph, area);
    }

    fn height(&self, _width: u16) -> u16 {
        BUTTON_HEIGHT
    }
}
