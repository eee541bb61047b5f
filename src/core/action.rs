//! # Actions
//!
//! Everything the user can do to the quiz becomes an `Action`.
//! Pressing `t`? That's `Action::SubmitAnswer(true)`.
//! Pressing Enter on the feedback screen? That's `Action::Continue`.
//!
//! `update()` applies an action to the `App` and returns an `Effect` for the
//! adapter to carry out. No I/O happens here.
//!
//! ```text
//! App + Action  →  update()  →  App' + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SubmitAnswer(bool),
    Advance,
    Finish,
    /// Advance if another question follows, otherwise finish.
    Continue,
    Restart,
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The session just entered `Complete`. Play the cue if sound is on.
    CompletionCue,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    let was_complete = app.session.is_complete();

    let result = match action {
        Action::SubmitAnswer(choice) => app.session.submit_answer(choice),
        Action::Advance => app.session.advance(),
        Action::Finish => app.session.finish(),
        Action::Continue => {
            if app.session.has_next_question() {
                app.session.advance()
            } else {
                app.session.finish()
            }
        }
        Action::Restart => {
            app.session.restart();
            Ok(())
        }
        Action::Quit => {
            info!(
                "Quit requested at score {}/{}",
                app.session.score(),
                app.session.total()
            );
            return Effect::Quit;
        }
    };

    if let Err(e) = result {
        warn!("Rejected {:?}: {}", action, e);
        app.status_message = e.to_string();
        return Effect::None;
    }

    app.status_message = match action {
        Action::Restart => "Quiz restarted".to_string(),
        _ => String::new(),
    };

    if !was_complete && app.session.is_complete() {
        info!(
            "Quiz finished: {}",
            app.labels
                .score_line(app.session.score(), app.session.total())
        );
        return Effect::CompletionCue;
    }
    Effect::None
}
