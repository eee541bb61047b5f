//! # TUI Components
//!
//! Every component here is stateless: it is built from the `App` on each
//! draw, receives its data as props (struct fields) and renders into a `Rect`.
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Top status bar: progress, score, status)
//! ├── question_card.rs   (Current question text)
//! ├── button.rs          (Bordered label + key hint)
//! ├── answer_buttons.rs  (True / False pair)
//! ├── feedback.rs        (Correct/Wrong badge + Next/Results button)
//! └── summary.rs         (Quiz complete screen)
//! ```
//!
//! Props are explicit so components never reach into global state:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! Feedback::new(correct, &app.labels.correct, &app.labels.next_question).render(frame, area);
//!
//! // Bad: hidden dependency on App
//! Feedback::from_app(&app).render(frame, area);
//! ```

pub mod answer_buttons;
pub mod button;
pub mod feedback;
pub mod question_card;
pub mod summary;
mod title_bar;

pub use answer_buttons::AnswerButtons;
pub use button::Button;
pub use feedback::Feedback;
pub use question_card::QuestionCard;
pub use summary::Summary;
pub use title_bar::TitleBar;
