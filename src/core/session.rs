//! # Quiz Session
//!
//! The state machine behind the quiz. Everything else in the crate renders
//! what this module reports, or forwards user intents into it.
//!
//! ```text
//!                submit_answer(choice)
//!   ┌──────────────────┐ ─────────────► ┌────────────────┐
//!   │ ActiveUnanswered │                │ ActiveAnswered │
//!   └──────────────────┘ ◄───────────── └────────────────┘
//!            ▲               advance()          │
//!            │          (not last question)     │ finish()
//!            │                                  ▼ (last question)
//!            │         restart()          ┌──────────┐
//!            └────────────────────────────│ Complete │
//!                   (from any state)      └──────────┘
//! ```
//!
//! Answering the last question does not end the session. The caller shows
//! feedback first and only `finish()` moves to `Complete`.
//!
//! Transitions return `Err(QuizError::InvalidTransition)` when called in the
//! wrong state and leave the session untouched.

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::core::error::QuizError;
use crate::core::question::{Question, QuestionBank};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    ActiveUnanswered,
    ActiveAnswered,
    Complete,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::ActiveUnanswered => write!(f, "waiting for an answer"),
            SessionState::ActiveAnswered => write!(f, "showing feedback"),
            SessionState::Complete => write!(f, "complete"),
        }
    }
}

/// The fallible transitions. `restart` always succeeds and is not listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    SubmitAnswer,
    Advance,
    Finish,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::SubmitAnswer => write!(f, "submit an answer"),
            Transition::Advance => write!(f, "advance"),
            Transition::Finish => write!(f, "finish"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    current_index: usize,
    answered: bool,
    /// `Some` only while `answered` is true.
    last_answer_correct: Option<bool>,
    score: usize,
    complete: bool,
}

impl QuizSession {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            current_index: 0,
            answered: false,
            last_answer_correct: None,
            score: 0,
            complete: false,
        }
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    pub fn submit_answer(&mut self, choice: bool) -> Result<(), QuizError> {
        self.require(Transition::SubmitAnswer, SessionState::ActiveUnanswered)?;

        let correct = self.bank.get(self.current_index)?.answer == choice;
        self.answered = true;
        self.last_answer_correct = Some(correct);
        if correct {
            self.score += 1;
        }
        debug!(
            "Question {} answered {} ({}), score {}",
            self.current_index,
            choice,
            if correct { "correct" } else { "wrong" },
            self.score
        );
        Ok(())
    }

    pub fn advance(&mut self) -> Result<(), QuizError> {
        self.require(Transition::Advance, SessionState::ActiveAnswered)?;
        if !self.has_next_question() {
            return Err(self.rejected(Transition::Advance));
        }

        self.current_index += 1;
        self.answered = false;
        self.last_answer_correct = None;
        debug!("Advanced to question {}", self.current_index);
        Ok(())
    }

    pub fn finish(&mut self) -> Result<(), QuizError> {
        self.require(Transition::Finish, SessionState::ActiveAnswered)?;
        if self.current_index != self.bank.last_index() {
            return Err(self.rejected(Transition::Finish));
        }

        self.complete = true;
        debug!("Quiz complete, score {}/{}", self.score, self.bank.len());
        Ok(())
    }

    pub fn restart(&mut self) {
        self.current_index = 0;
        self.answered = false;
        self.last_answer_correct = None;
        self.score = 0;
        self.complete = false;
        debug!("Quiz restarted");
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn state(&self) -> SessionState {
        if self.complete {
            SessionState::Complete
        } else if self.answered {
            SessionState::ActiveAnswered
        } else {
            SessionState::ActiveUnanswered
        }
    }

    pub fn current_question(&self) -> Result<&Question, QuizError> {
        if self.complete {
            return Err(QuizError::SessionComplete);
        }
        self.bank.get(self.current_index)
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn was_last_answer_correct(&self) -> Result<bool, QuizError> {
        match self.last_answer_correct {
            Some(correct) if self.answered => Ok(correct),
            _ => Err(QuizError::UnansweredAccess),
        }
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn has_next_question(&self) -> bool {
        self.current_index < self.bank.last_index()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of questions in the bank.
    pub fn total(&self) -> usize {
        self.bank.len()
    }

    pub fn bank(&self) -> &Arc<QuestionBank> {
        &self.bank
    }

    fn require(&self, transition: Transition, expected: SessionState) -> Result<(), QuizError> {
        if self.state() == expected {
            Ok(())
        } else {
            Err(self.rejected(transition))
        }
    }

    fn rejected(&self, transition: Transition) -> QuizError {
        QuizError::InvalidTransition {
            transition,
            state: self.state(),
        }
    }
}
