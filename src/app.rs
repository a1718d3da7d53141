use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

use crate::error::ConfigurationError;
use crate::models::{AppState, QuestionGroup};
use crate::quizzer::{Quizzer, SessionMode};
use crate::report::SessionReport;
use crate::ui;

/// Outcome of the last Enter press on the question screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong,
    /// Nothing was typed, so nothing was submitted.
    EmptyInput,
}

/// Front-end state around a running [`Quizzer`].
pub struct App {
    pub state: AppState,
    corpus: Vec<QuestionGroup>,
    mode: SessionMode,
    rng: StdRng,
    quizzer: Quizzer,
    input: String,
    feedback: Option<Feedback>,
    result_scroll: usize,
    show_answers: bool,
}

impl App {
    pub fn new(corpus: Vec<QuestionGroup>, mode: SessionMode) -> Result<Self, ConfigurationError> {
        Self::with_rng(corpus, mode, StdRng::from_entropy())
    }

    /// Build an app whose sessions, restarts included, replay for the same seed.
    pub fn with_seed(
        corpus: Vec<QuestionGroup>,
        mode: SessionMode,
        seed: u64,
    ) -> Result<Self, ConfigurationError> {
        Self::with_rng(corpus, mode, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        corpus: Vec<QuestionGroup>,
        mode: SessionMode,
        mut rng: StdRng,
    ) -> Result<Self, ConfigurationError> {
        let quizzer = start_session(&corpus, mode, &mut rng)?;

        Ok(Self {
            state: AppState::Welcome,
            corpus,
            mode,
            rng,
            quizzer,
            input: String::new(),
            feedback: None,
            result_scroll: 0,
            show_answers: false,
        })
    }

    /// List the accepted answers of missed questions on the result screen.
    pub fn with_answer_reveal(mut self, show_answers: bool) -> Self {
        self.show_answers = show_answers;
        self
    }

    pub fn quizzer(&self) -> &Quizzer {
        &self.quizzer
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn shows_answers(&self) -> bool {
        self.show_answers
    }

    pub fn report(&self) -> SessionReport {
        SessionReport::from_quizzer(&self.quizzer)
    }

    pub fn start_quiz(&mut self) {
        self.state = if self.quizzer.is_ended() {
            AppState::Result
        } else {
            AppState::Quiz
        };
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Send the typed answer to the quizzer.
    ///
    /// Blank input is refused here and never reaches the quizzer.
    pub fn submit_answer(&mut self) {
        if self.input.trim().is_empty() {
            self.feedback = Some(Feedback::EmptyInput);
            return;
        }

        let answer = std::mem::take(&mut self.input);
        let correct = self.quizzer.attempt_answer(&answer);
        self.feedback = Some(if correct {
            Feedback::Correct
        } else {
            Feedback::Wrong
        });

        if self.quizzer.is_ended() {
            debug!(points = self.quizzer.points(), "showing results");
            self.state = AppState::Result;
            self.result_scroll = 0;
        }
    }

    pub fn scroll_results_down(&mut self) {
        let max = ui::review_line_count(self).saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Start a fresh session over the same questions.
    pub fn restart(&mut self) -> Result<(), ConfigurationError> {
        self.quizzer = start_session(&self.corpus, self.mode, &mut self.rng)?;
        self.state = AppState::Welcome;
        self.input.clear();
        self.feedback = None;
        self.result_scroll = 0;
        Ok(())
    }
}

fn start_session(
    corpus: &[QuestionGroup],
    mode: SessionMode,
    rng: &mut StdRng,
) -> Result<Quizzer, ConfigurationError> {
    Quizzer::seeded(corpus.to_vec(), mode, rng.next_u64())
}
