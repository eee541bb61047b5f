//! # Application State
//!
//! Core state for tfquiz. Domain logic only, no TUI types.
//!
//! ```text
//! App
//! ├── session: QuizSession     // the quiz state machine
//! ├── labels: Labels           // user-visible strings
//! ├── status_message: String   // title bar text
//! └── sound: bool              // completion cue enabled
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.

use std::sync::Arc;

use crate::core::action::Effect;
use crate::core::config::ResolvedConfig;
use crate::core::labels::Labels;
use crate::core::question::QuestionBank;
use crate::core::session::QuizSession;

pub struct App {
    pub session: QuizSession,
    pub labels: Labels,
    pub status_message: String,
    pub sound: bool,
}

impl App {
    pub fn new(bank: Arc<QuestionBank>, labels: Labels) -> Self {
        Self {
            session: QuizSession::new(bank),
            labels,
            status_message: String::new(),
            sound: true,
        }
    }

    pub fn from_config(bank: Arc<QuestionBank>, config: &ResolvedConfig) -> Self {
        Self {
            sound: config.sound,
            ..Self::new(bank, config.labels.clone())
        }
    }

    /// Whether the adapter should play the completion cue for `effect`.
    pub fn wants_completion_cue(&self, effect: Effect) -> bool {
        effect == Effect::CompletionCue && self.sound
    }

    /// "Question 2/4" while active, empty once complete.
    pub fn progress(&self) -> String {
        if self.session.is_complete() {
            String::new()
        } else {
            format!(
                "Question {}/{}",
                self.session.current_index() + 1,
                self.session.total()
            )
        }
    }
}
