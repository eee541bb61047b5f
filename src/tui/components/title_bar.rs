//! # TitleBar Component
//!
//! Top status bar: app name, progress, running score and the last status
//! message (usually empty, or the reason the last key was rejected).
//!
//! Stateless. It receives all data as props and renders a single line:
//!
//! 1. **Active, with status**: `"tfquiz | Question 2/4 | Score: 1/4 | Quiz restarted"`
//! 2. **Active**: `"tfquiz | Question 2/4 | Score: 1/4"`
//! 3. **Complete**: `"tfquiz | Score: 4/4"` (progress is empty)

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// "Question 2/4", empty once complete
    pub progress: String,
    /// "Score: 1/4"
    pub score_line: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(progress: String, score_line: String, status_message: String) -> Self {
        Self {
            progress,
            score_line,
            status_message,
        }
    }

    fn title_text(&self) -> String {
        [
            "tfquiz",
            self.progress.as_str(),
            self.score_line.as_str(),
            self.status_message.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.title_text(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        frame.render_widget(line, area);
    }
}
