mod answer;
mod group;
mod question;

pub use answer::Answer;
pub use group::QuestionGroup;
pub use question::{Attempt, DEFAULT_ATTEMPTS, DEFAULT_SCORING, Question};

/// Screen the terminal front end is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}
