//! Quiz error types.
//!
//! These errors cover invalid user input while answering an assessment.
//! Storage and configuration failures are reported through `anyhow` with
//! context instead.

use thiserror::Error;

/// Errors that can occur while answering or scoring an assessment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// More answers were submitted than there are questions.
    #[error("received {answers} answers for {questions} questions")]
    TooManyAnswers { answers: usize, questions: usize },

    /// A choice did not name one of the question's options.
    #[error("invalid choice '{choice}' for question {question}: expected 1-{options} or a-{last}")]
    InvalidChoice {
        question: usize,
        choice: String,
        options: usize,
        last: char,
    },

    /// The question index is out of range for the current session.
    #[error("no question at position {0}")]
    NoSuchQuestion(usize),
}

impl QuizError {
    /// Returns `true` if the error came from a malformed answer choice.
    pub fn is_invalid_choice(&self) -> bool {
        matches!(self, QuizError::InvalidChoice { .. })
    }
}
