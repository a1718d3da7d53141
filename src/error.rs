//! Configuration errors raised while building questions and sessions.

use thiserror::Error;

/// A question, group or session was set up with unusable data.
///
/// These are only ever produced by constructors; a session that was
/// built successfully never fails while answers are submitted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigurationError {
    #[error("question '{question}' is missing a valid answer")]
    NoAnswers { question: String },

    #[error("question '{question}' must have at least one attempt permitted")]
    NoAttempts { question: String },

    #[error("question '{question}' has an empty scoring list")]
    NoScoring { question: String },

    #[error("question group '{group}' contains no questions")]
    EmptyGroup { group: String },

    #[error("session needs {requested} questions but only {available} are available")]
    NotEnoughQuestions { requested: usize, available: usize },
}
