//! User-visible strings. Defaults are English; every one can be replaced
//! from the `[labels]` section of the config file.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub true_label: String,
    pub false_label: String,
    pub correct: String,
    pub wrong: String,
    pub next_question: String,
    pub results: String,
    pub quiz_complete: String,
    /// Template with `{score}` and `{total}` placeholders.
    pub score: String,
    pub restart: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            true_label: "True".to_string(),
            false_label: "False".to_string(),
            correct: "Correct Answer".to_string(),
            wrong: "Wrong Answer".to_string(),
            next_question: "Next Question".to_string(),
            results: "Results".to_string(),
            quiz_complete: "Quiz Complete!".to_string(),
            score: "Score: {score}/{total}".to_string(),
            restart: "Restart Quiz".to_string(),
        }
    }
}

impl Labels {
    pub fn score_line(&self, score: usize, total: usize) -> String {
        self.score
            .replace("{score}", &score.to_string())
            .replace("{total}", &total.to_string())
    }
}
