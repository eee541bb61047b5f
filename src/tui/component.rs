use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive their data as struct fields ("props") and render into
/// a `Frame` within a given `Rect`. None of them hold quiz state; they are
/// rebuilt from the `App` on every draw.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Rows the component wants, given the available width.
    fn height(&self, _width: u16) -> u16 {
        1
    }
}
