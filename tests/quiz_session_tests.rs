use std::sync::Arc;

use tfquiz::core::action::{Action, Effect, update};
use tfquiz::core::labels::Labels;
use tfquiz::core::question::{Question, QuestionBank, default_bank, from_toml_str};
use tfquiz::core::state::App;
use tfquiz::core::{QuizError, QuizSession, SessionState, Transition};

// ============================================================================
// Helper Functions
// ============================================================================

fn session() -> QuizSession {
    QuizSession::new(Arc::new(default_bank()))
}

/// Submit each answer in turn, advancing between questions but not finishing.
fn answer_all(session: &mut QuizSession, answers: &[bool]) {
    for (i, answer) in answers.iter().enumerate() {
        session.submit_answer(*answer).unwrap();
        if i + 1 < answers.len() {
            session.advance().unwrap();
        }
    }
}

/// Everything observable through the public query API.
fn observe(session: &QuizSession) -> (SessionState, usize, bool, Option<bool>, usize, bool) {
    (
        session.state(),
        session.current_index(),
        session.is_answered(),
        session.was_last_answer_correct().ok(),
        session.score(),
        session.is_complete(),
    )
}

// ============================================================================
// Walkthroughs
// ============================================================================

#[test]
fn all_correct_answers_score_full_marks_after_finish() {
    let mut session = session();
    answer_all(&mut session, &[true, false, false, true]);
    assert_eq!(session.score(), 4);
    assert!(!session.is_complete());

    session.finish().unwrap();
    assert!(session.is_complete());
    assert_eq!(session.score(), 4);
}

#[test]
fn answering_true_to_a_false_question_loses_that_point() {
    // "Android is made by Apple" is false, so answering true there is wrong
    let mut session = session();
    answer_all(&mut session, &[true, true, false, true]);
    session.finish().unwrap();
    assert!(session.is_complete());
    assert_eq!(session.score(), 3);
}

#[test]
fn wrong_then_right_answer_scores_once() {
    let mut session = session();
    session.submit_answer(false).unwrap();
    assert!(!session.was_last_answer_correct().unwrap());
    assert_eq!(session.score(), 0);

    session.advance().unwrap();
    session.submit_answer(false).unwrap();
    assert!(session.was_last_answer_correct().unwrap());
    assert_eq!(session.score(), 1);
}

#[test]
fn advance_before_answering_is_rejected_without_change() {
    let mut session = session();
    let before = observe(&session);

    let err = session.advance().unwrap_err();
    assert!(matches!(
        err,
        QuizError::InvalidTransition {
            transition: Transition::Advance,
            state: SessionState::ActiveUnanswered,
        }
    ));
    assert_eq!(observe(&session), before);
}

#[test]
fn restart_after_completion_returns_to_first_question() {
    let bank = Arc::new(default_bank());
    let mut session = QuizSession::new(bank.clone());
    answer_all(&mut session, &[true, false, true, true]);
    session.finish().unwrap();
    assert_eq!(session.score(), 3);

    session.restart();
    assert_eq!(session.current_question().unwrap(), bank.get(0).unwrap());
    assert_eq!(session.score(), 0);
    assert_eq!(session.state(), SessionState::ActiveUnanswered);
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn score_stays_within_bounds_for_every_answer_pattern() {
    let total = default_bank().len();
    for pattern in 0..(1u32 << total) {
        let answers: Vec<bool> = (0..total).map(|i| pattern & (1 << i) != 0).collect();
        let mut session = session();
        let mut expected = 0;
        for (i, answer) in answers.iter().enumerate() {
            let before = session.score();
            session.submit_answer(*answer).unwrap();
            let gained = session.score() - before;
            assert!(gained <= 1);
            assert_eq!(gained == 1, session.was_last_answer_correct().unwrap());
            expected += gained;

            // Re-submitting is rejected and never re-scores
            assert!(session.submit_answer(*answer).is_err());
            assert!(session.submit_answer(!*answer).is_err());
            assert_eq!(session.score(), expected);
            assert!(session.score() <= total);

            if i + 1 < total {
                session.advance().unwrap();
            }
        }
        session.finish().unwrap();
        assert_eq!(session.score(), expected);
    }
}

#[test]
fn finish_only_at_last_answered_question() {
    let mut session = session();
    for _ in 0..3 {
        assert!(session.finish().is_err());
        session.submit_answer(true).unwrap();
        assert!(session.finish().is_err());
        session.advance().unwrap();
    }
    assert!(session.finish().is_err());
    session.submit_answer(true).unwrap();
    assert!(!session.has_next_question());
    assert!(matches!(
        session.advance(),
        Err(QuizError::InvalidTransition { transition: Transition::Advance, .. })
    ));
    session.finish().unwrap();
}

#[test]
fn restart_matches_a_fresh_session_from_any_point() {
    let fresh = observe(&session());
    for steps in 0..=8 {
        let mut session = session();
        for _ in 0..steps {
            match session.state() {
                SessionState::ActiveUnanswered => session.submit_answer(true).unwrap(),
                SessionState::ActiveAnswered if session.has_next_question() => {
                    session.advance().unwrap()
                }
                SessionState::ActiveAnswered => session.finish().unwrap(),
                SessionState::Complete => {}
            }
        }
        session.restart();
        assert_eq!(observe(&session), fresh, "after {steps} steps");
    }
}

#[test]
fn unanswered_access_is_reported() {
    let session = session();
    assert!(matches!(
        session.was_last_answer_correct(),
        Err(QuizError::UnansweredAccess)
    ));
}

#[test]
fn single_question_bank_is_first_and_last() {
    let bank = QuestionBank::new(vec![Question::new("Only question", false)]).unwrap();
    let mut session = QuizSession::new(Arc::new(bank));
    assert!(!session.has_next_question());
    session.submit_answer(false).unwrap();
    assert!(session.advance().is_err());
    session.finish().unwrap();
    assert_eq!(session.score(), 1);
}

// ============================================================================
// App + reducer
// ============================================================================

#[test]
fn reducer_plays_cue_once_on_completion() {
    let bank = from_toml_str(
        r#"
[[questions]]
text = "Rust has null"
answer = false

[[questions]]
text = "Rust has enums"
answer = true
"#,
    )
    .unwrap();
    let mut app = App::new(Arc::new(bank), Labels::default());

    let mut effects = Vec::new();
    for action in [
        Action::SubmitAnswer(false),
        Action::SubmitAnswer(false),
        Action::Continue,
        Action::SubmitAnswer(true),
        Action::Continue,
        Action::Continue,
        Action::Restart,
    ] {
        effects.push(update(&mut app, action));
    }

    assert_eq!(
        effects,
        vec![
            Effect::None,
            Effect::None,
            Effect::None,
            Effect::None,
            Effect::CompletionCue,
            Effect::None,
            Effect::None,
        ]
    );
    assert_eq!(app.session.state(), SessionState::ActiveUnanswered);
    assert_eq!(app.session.score(), 0);
}
