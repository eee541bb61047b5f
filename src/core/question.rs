//! # Questions
//!
//! A `QuestionBank` is the fixed, ordered set of true/false questions a quiz
//! runs through. It is built once and never changes afterwards; sessions hold
//! it behind an `Arc` so a restart reuses the same bank.
//!
//! Banks come from one of two places:
//! - [`default_bank`]: the four questions the app ships with
//! - [`load_bank`]: a TOML file of `[[questions]]` tables
//!
//! ```toml
//! [[questions]]
//! text = "Android is an operating system."
//! answer = true
//! ```

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::error::QuizError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub text: String,
    /// The correct answer.
    pub answer: bool,
}

impl Question {
    pub fn new(text: impl Into<String>, answer: bool) -> Self {
        Self {
            text: text.into(),
            answer,
        }
    }
}

/// Ordered, non-empty, immutable list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        Ok(Self { questions })
    }

    pub fn get(&self, index: usize) -> Result<&Question, QuizError> {
        self.questions.get(index).ok_or(QuizError::OutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; `new` rejects an empty list.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

/// The built-in bank used when no question file is configured.
pub fn default_bank() -> QuestionBank {
    QuestionBank {
        questions: vec![
            Question::new("Android is an operating system.", true),
            Question::new("Android is made by Apple", false),
            Question::new("Kotlin is made by a Kuwaiti", false),
            Question::new("Kotlin is supported in Intellij", true),
        ],
    }
}

#[derive(Debug, Deserialize)]
struct QuestionFile {
    #[serde(default)]
    questions: Vec<Question>,
}

/// Parse a bank from TOML text.
pub fn from_toml_str(contents: &str) -> Result<QuestionBank, QuizError> {
    let file: QuestionFile = toml::from_str(contents).map_err(QuizError::Parse)?;
    debug!("Parsed {} questions", file.questions.len());
    QuestionBank::new(file.questions)
}

/// Load a bank from a TOML question file.
pub fn load_bank(path: &Path) -> Result<QuestionBank, QuizError> {
    let contents = fs::read_to_string(path).map_err(QuizError::Io)?;
    let bank = from_toml_str(&contents)?;
    info!("Loaded {} questions from {}", bank.len(), path.display());
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bank_rejected() {
        assert!(matches!(QuestionBank::new(vec![]), Err(QuizError::EmptyBank)));
    }

    #[test]
    fn test_get_in_and_out_of_range() {
        let bank = default_bank();
        assert_eq!(bank.get(0).unwrap().text, "Android is an operating system.");
        assert!(bank.get(3).unwrap().answer);
        assert!(matches!(
            bank.get(4),
            Err(QuizError::OutOfRange { index: 4, len: 4 })
        ));
    }

    #[test]
    fn test_len_and_last_index() {
        let bank = default_bank();
        assert_eq!(bank.len(), 4);
        assert_eq!(bank.last_index(), 3);
        assert!(!bank.is_empty());

        let single = QuestionBank::new(vec![Question::new("Only one", true)]).unwrap();
        assert_eq!(single.last_index(), 0);
    }

    #[test]
    fn test_every_constructible_bank_is_non_empty() {
        let single = QuestionBank::new(vec![Question::new("Only one", false)]).unwrap();
        assert!(!single.is_empty());
        assert_eq!(single.len(), 1);
        assert!(matches!(QuestionBank::new(Vec::new()), Err(QuizError::EmptyBank)));
    }

    #[test]
    fn test_iter_keeps_insertion_order() {
        let answers: Vec<bool> = default_bank().iter().map(|q| q.answer).collect();
        assert_eq!(answers, vec![true, false, false, true]);
    }

    #[test]
    fn test_from_toml_str() {
        let toml_str = r#"
[[questions]]
text = "Rust has a garbage collector"
answer = false

[[questions]]
text = "Cargo is Rust's package manager"
answer = true
"#;
        let bank = from_toml_str(toml_str).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.get(0).unwrap(), &Question::new("Rust has a garbage collector", false));
        assert!(bank.get(1).unwrap().answer);
    }

    #[test]
    fn test_from_toml_str_without_questions_is_empty() {
        assert!(matches!(from_toml_str(""), Err(QuizError::EmptyBank)));
    }

    #[test]
    fn test_from_toml_str_missing_answer_is_parse_error() {
        let toml_str = r#"
[[questions]]
text = "No answer here"
"#;
        assert!(matches!(from_toml_str(toml_str), Err(QuizError::Parse(_))));
    }

    #[test]
    fn test_load_bank_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("tfquiz-does-not-exist.toml");
        assert!(matches!(load_bank(&path), Err(QuizError::Io(_))));
    }

    #[test]
    fn test_load_bank_from_file() {
        let path = std::env::temp_dir().join(format!("tfquiz-bank-{}.toml", std::process::id()));
        fs::write(&path, "[[questions]]\ntext = \"Ferris is a crab\"\nanswer = true\n").unwrap();
        let bank = load_bank(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.get(0).unwrap().text, "Ferris is a crab");
    }
}
