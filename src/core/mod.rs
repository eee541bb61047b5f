//! # Core Application Logic
//!
//! The quiz itself. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • QuestionBank         │
//!                    │  • QuizSession          │
//!                    │  • Action → update()    │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`question`]: `Question`, `QuestionBank` and bank loading
//! - [`session`]: `QuizSession`, the state machine
//! - [`state`]: `App`, everything the adapter renders
//! - [`action`]: `Action`, `Effect` and the `update()` reducer
//! - [`config`]: layered settings
//! - [`labels`]: user-visible strings

pub mod action;
pub mod config;
pub mod error;
pub mod labels;
pub mod question;
pub mod session;
pub mod state;

pub use error::QuizError;
pub use question::{Question, QuestionBank};
pub use session::{QuizSession, SessionState, Transition};
