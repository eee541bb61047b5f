use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{AnswerButtons, Feedback, QuestionCard, Summary, TitleBar};

/// Content column never grows wider than this.
const MAX_CONTENT_WIDTH: u16 = 72;

pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    let mut title_bar = TitleBar::new(
        app.progress(),
        app.labels
            .score_line(app.session.score(), app.session.total()),
        app.status_message.clone(),
    );
    title_bar.render(frame, title_area);

    let content_width = main_area.width.min(MAX_CONTENT_WIDTH);
    let [content_area] = Layout::horizontal([Length(content_width)])
        .flex(Flex::Center)
        .areas(main_area);

    if app.session.is_complete() {
        draw_summary(frame, content_area, app);
    } else {
        draw_question(frame, content_area, app);
    }

    let help = Paragraph::new(help_text(app))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

fn draw_question(frame: &mut Frame, area: Rect, app: &App) {
    // Not reachable while active; render nothing rather than panic.
    let Ok(question) = app.session.current_question() else {
        return;
    };
    let progress = app.progress();
    let mut card = QuestionCard::new(&question.text, &progress);
    let card_height = card.height(area.width);

    let labels = &app.labels;
    let mut controls: Box<dyn Component + '_> = match app.session.was_last_answer_correct() {
        Err(_) => Box::new(AnswerButtons::new(&labels.true_label, &labels.false_label)),
        Ok(correct) => {
            let verdict = if correct { &labels.correct } else { &labels.wrong };
            let button_label = if app.session.has_next_question() {
                &labels.next_question
            } else {
                &labels.results
            };
            Box::new(Feedback::new(correct, verdict, button_label))
        }
    };
    let controls_height = controls.height(area.width);

    let [card_area, _, controls_area] = Layout::vertical([
        Constraint::Length(card_height),
        Constraint::Length(1), // Spacer
        Constraint::Length(controls_height),
    ])
    .flex(Flex::Center)
    .areas(area);

    card.render(frame, card_area);
    controls.render(frame, controls_area);
}

fn draw_summary(frame: &mut Frame, area: Rect, app: &App) {
    let labels = &app.labels;
    let mut summary = Summary::new(
        &labels.quiz_complete,
        labels.score_line(app.session.score(), app.session.total()),
        &labels.restart,
    );
    summary.render(frame, area);
}

/// Key hints for the footer, matching what `action_for` accepts.
fn help_text(app: &App) -> &'static str {
    if app.session.is_complete() {
        "r/Enter restart · q quit"
    } else if app.session.is_answered() {
        "Enter/Space continue · Ctrl+R restart · q quit"
    } else {
        "t/← true · f/→ false · Ctrl+R restart · q quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{buffer_text, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_unanswered_shows_question_and_answer_buttons() {
        let app = test_app();
        let text = render(&app);
        assert!(text.contains("Android is an operating system."));
        assert!(text.contains("Question 1/4"));
        assert!(text.contains("True"));
        assert!(text.contains("False"));
        assert!(!text.contains("Correct Answer"));
    }

    #[test]
    fn test_answered_shows_feedback_and_next() {
        let mut app = test_app();
        update(&mut app, Action::SubmitAnswer(true));
        let text = render(&app);
        assert!(text.contains("Correct Answer"));
        assert!(text.contains("Next Question"));
        assert!(text.contains("Score: 1/4"));
        assert!(!text.contains("[t]"));
    }

    #[test]
    fn test_last_question_offers_results_not_next() {
        let mut app = test_app();
        for answer in [true, false, false] {
            update(&mut app, Action::SubmitAnswer(answer));
            update(&mut app, Action::Advance);
        }
        update(&mut app, Action::SubmitAnswer(false));
        let text = render(&app);
        assert!(text.contains("Wrong Answer"));
        assert!(text.contains("Results"));
        assert!(!text.contains("Next Question"));
    }

    #[test]
    fn test_complete_shows_summary() {
        let mut app = test_app();
        for answer in [true, false, false, true] {
            update(&mut app, Action::SubmitAnswer(answer));
            update(&mut app, Action::Continue);
        }
        let text = render(&app);
        assert!(text.contains("Quiz Complete!"));
        assert!(text.contains("Score: 4/4"));
        assert!(text.contains("Restart Quiz"));
        assert!(!text.contains("Question 4/4"));
    }

    #[test]
    fn test_custom_labels_are_rendered() {
        let mut app = test_app();
        app.labels.true_label = "Wahr".to_string();
        app.labels.false_label = "Falsch".to_string();
        let text = render(&app);
        assert!(text.contains("Wahr"));
        assert!(text.contains("Falsch"));
    }
}
