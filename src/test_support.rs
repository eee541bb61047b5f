//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use ratatui::buffer::Buffer;

use crate::core::labels::Labels;
use crate::core::question::{Question, QuestionBank, default_bank};
use crate::core::state::App;

/// The built-in four-question bank.
pub fn sample_bank() -> Arc<QuestionBank> {
    Arc::new(default_bank())
}

/// A bank whose only question is also its last one.
pub fn single_question_bank() -> Arc<QuestionBank> {
    Arc::new(
        QuestionBank::new(vec![Question::new("Rust compiles to native code", true)])
            .expect("one question is a valid bank"),
    )
}

/// Creates a test App over the sample bank with default labels.
pub fn test_app() -> App {
    App::new(sample_bank(), Labels::default())
}

/// Concatenates every cell symbol of a rendered test buffer.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}
