use std::fmt;

use crate::core::session::{SessionState, Transition};

/// Errors raised by the question bank and the quiz session.
///
/// Everything except `Io` and `Parse` is a contract violation by the caller:
/// the call that raised it changed nothing.
#[derive(Debug)]
pub enum QuizError {
    /// Index outside `[0, len)` of the question bank.
    OutOfRange { index: usize, len: usize },
    /// A transition was invoked in a state that does not allow it.
    InvalidTransition {
        transition: Transition,
        state: SessionState,
    },
    /// Correctness was queried before the current question was answered.
    UnansweredAccess,
    /// The current question was queried after the session completed.
    SessionComplete,
    /// A question bank needs at least one question.
    EmptyBank,
    /// Failed to read a question file.
    Io(std::io::Error),
    /// Failed to parse a question file.
    Parse(toml::de::Error),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::OutOfRange { index, len } => {
                write!(f, "question index {index} out of range (bank has {len})")
            }
            QuizError::InvalidTransition { transition, state } => {
                write!(f, "cannot {transition} while {state}")
            }
            QuizError::UnansweredAccess => write!(f, "current question has not been answered"),
            QuizError::SessionComplete => write!(f, "quiz is already complete"),
            QuizError::EmptyBank => write!(f, "question bank is empty"),
            QuizError::Io(e) => write!(f, "question file I/O error: {e}"),
            QuizError::Parse(e) => write!(f, "question file parse error: {e}"),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Io(e) => Some(e),
            QuizError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_message() {
        let err = QuizError::InvalidTransition {
            transition: Transition::Advance,
            state: SessionState::ActiveUnanswered,
        };
        assert_eq!(err.to_string(), "cannot advance while waiting for an answer");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = QuizError::OutOfRange { index: 7, len: 4 };
        assert_eq!(err.to_string(), "question index 7 out of range (bank has 4)");
    }
}
