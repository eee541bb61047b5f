use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 2;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Borders plus one blank row above and below the text.
const VERTICAL_OVERHEAD: u16 = 4;

/// The current question's text in a rounded box.
///
/// The text is wrapped with `textwrap` before rendering so that
/// [`height`](Component::height) and the rendered paragraph always agree.
#[derive(Clone, Copy)]
pub struct QuestionCard<'a> {
    pub text: &'a str,
    /// "Question 2/4"
    pub title: &'a str,
}

impl<'a> QuestionCard<'a> {
    pub fn new(text: &'a str, title: &'a str) -> Self {
        Self { text, title }
    }

    fn wrapped_lines(&self, width: u16) -> Vec<String> {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD).max(1);
        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace)
            .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);
        textwrap::wrap(self.text.trim(), options)
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    }
}

impl<'a> Widget for QuestionCard<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::bordered()
            .title(self.title)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM))
            .padding(Padding::new(CONTENT_PAD_H, CONTENT_PAD_H, 1, 1));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .wrapped_lines(area.width)
            .into_iter()
            .map(Line::from)
            .collect();
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .render(inner_area, buf);
    }
}

impl<'a> Component for QuestionCard<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }

    fn height(&self, width: u16) -> u16 {
        (self.wrapped_lines(width).len() as u16).max(1) + VERTICAL_OVERHEAD
    }
}
