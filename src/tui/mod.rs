//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the quiz,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop blocks on input for up to 500ms and only
//! redraws after an event (key press or terminal resize).
//!
//! ## Intents
//!
//! The adapter only forwards actions the current screen offers: answer keys
//! while unanswered, continue while showing feedback, restart on the summary.
//! Anything else is dropped here instead of reaching the session.

mod component;
mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::{Write, stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::question::QuestionBank;
use crate::core::session::{QuizSession, SessionState};
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// ASCII BEL, the terminal's built-in "sound".
const BELL: &[u8] = b"\x07";

struct CursorGuard;

impl CursorGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Map a terminal event to the action the current screen offers, if any.
pub fn action_for(event: &TuiEvent, session: &QuizSession) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit | TuiEvent::Escape | TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::Restart => Some(Action::Restart),
        TuiEvent::Resize => None,
        _ => match session.state() {
            SessionState::ActiveUnanswered => match event {
                TuiEvent::InputChar('t' | 'T' | 'y' | 'Y') | TuiEvent::Left => {
                    Some(Action::SubmitAnswer(true))
                }
                TuiEvent::InputChar('f' | 'F' | 'n' | 'N') | TuiEvent::Right => {
                    Some(Action::SubmitAnswer(false))
                }
                _ => None,
            },
            SessionState::ActiveAnswered => match event {
                TuiEvent::Submit | TuiEvent::InputChar(' ') => Some(Action::Continue),
                _ => None,
            },
            SessionState::Complete => match event {
                TuiEvent::Submit | TuiEvent::InputChar('r' | 'R') => Some(Action::Restart),
                _ => None,
            },
        },
    }
}

fn play_completion_cue() {
    let mut out = stdout();
    if let Err(e) = out.write_all(BELL).and_then(|_| out.flush()) {
        warn!("Failed to play completion cue: {}", e);
    }
}

pub fn run(config: ResolvedConfig, bank: Arc<QuestionBank>) -> std::io::Result<()> {
    let mut app = App::from_config(bank, &config);
    info!(
        "Starting quiz with {} questions (sound {})",
        app.session.total(),
        if app.sound { "on" } else { "off" }
    );

    let mut terminal = ratatui::init();
    let result = CursorGuard::new().and_then(|_guard| event_loop(&mut terminal, &mut app));
    ratatui::restore();

    info!(
        "Exiting with score {}/{}",
        app.session.score(),
        app.session.total()
    );
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL)?;
        if first_event.is_none() {
            continue;
        }
        needs_redraw = true;

        // Process first event + drain everything pending before the next draw
        let mut pending = first_event;
        while let Some(event) = pending {
            if let Some(action) = action_for(&event, &app.session) {
                match update(app, action) {
                    Effect::Quit => return Ok(()),
                    effect if app.wants_completion_cue(effect) => play_completion_cue(),
                    Effect::CompletionCue => debug!("Completion cue muted"),
                    Effect::None => {}
                }
            }
            pending = poll_event_immediate()?;
        }
    }
}
