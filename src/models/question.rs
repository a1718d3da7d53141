use crate::error::ConfigurationError;

use super::Answer;

/// Attempts permitted when a question file does not say otherwise.
pub const DEFAULT_ATTEMPTS: u32 = 2;

/// Points per attempt when a question file does not say otherwise.
pub const DEFAULT_SCORING: [u32; 2] = [2, 1];

/// A single submitted answer and whether it was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub submitted: String,
    pub correct: bool,
}

/// A question together with its per-session progress.
#[derive(Debug, Clone)]
pub struct Question {
    text: String,
    prompt: String,
    answers: Vec<Answer>,
    attempts_permitted: u32,
    scoring: Vec<u32>,

    attempts_made: u32,
    history: Vec<Attempt>,
    points_awarded: Option<u32>,
    was_asked: bool,
}

impl Question {
    /// Create a question with the default attempt count and scoring.
    pub fn new(
        text: impl Into<String>,
        prompt: impl Into<String>,
        answers: Vec<Answer>,
    ) -> Result<Self, ConfigurationError> {
        Self::with_scoring(text, prompt, answers, DEFAULT_ATTEMPTS, &DEFAULT_SCORING)
    }

    /// Create a question with explicit attempt and scoring rules.
    ///
    /// `scoring[i]` is awarded for a correct answer on attempt `i + 1`. A list
    /// shorter than `attempts` is padded with its last value, a longer one is
    /// cut to `attempts` entries.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] naming the question if `answers` or
    /// `scoring` is empty, or if `attempts` is zero.
    pub fn with_scoring(
        text: impl Into<String>,
        prompt: impl Into<String>,
        answers: Vec<Answer>,
        attempts: u32,
        scoring: &[u32],
    ) -> Result<Self, ConfigurationError> {
        let text = text.into();

        if answers.is_empty() {
            return Err(ConfigurationError::NoAnswers { question: text });
        }
        if attempts == 0 {
            return Err(ConfigurationError::NoAttempts { question: text });
        }
        let Some(&last) = scoring.last() else {
            return Err(ConfigurationError::NoScoring { question: text });
        };

        let slots = attempts as usize;
        let mut scoring: Vec<u32> = scoring.iter().copied().take(slots).collect();
        scoring.resize(slots, last);

        Ok(Self {
            text,
            prompt: prompt.into(),
            answers,
            attempts_permitted: attempts,
            scoring,
            attempts_made: 0,
            history: Vec::new(),
            points_awarded: None,
            was_asked: false,
        })
    }

    /// Submit an answer and return whether it was correct and the points it earned.
    ///
    /// Once every permitted attempt is used this returns `(false, 0)` and
    /// leaves the question untouched.
    pub fn attempt(&mut self, submitted: &str) -> (bool, u32) {
        if self.attempts_remaining() == 0 {
            return (false, 0);
        }

        self.attempts_made += 1;
        let correct = self.answers.iter().any(|answer| answer.check(submitted));
        self.history.push(Attempt {
            submitted: submitted.to_string(),
            correct,
        });

        let points = if correct {
            self.scoring[self.attempts_made as usize - 1]
        } else {
            0
        };
        self.points_awarded = Some(points);

        (correct, points)
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_permitted.saturating_sub(self.attempts_made)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn attempts_permitted(&self) -> u32 {
        self.attempts_permitted
    }

    pub fn attempts_made(&self) -> u32 {
        self.attempts_made
    }

    /// Points per attempt, always `attempts_permitted` entries long.
    pub fn scoring(&self) -> &[u32] {
        &self.scoring
    }

    /// Every attempt so far, oldest first.
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    /// Points of the latest attempt, `None` before the first one.
    pub fn points_awarded(&self) -> Option<u32> {
        self.points_awarded
    }

    /// Best score this question can give.
    pub fn max_points(&self) -> u32 {
        self.scoring.iter().copied().max().unwrap_or(0)
    }

    /// True once any attempt was correct.
    pub fn is_solved(&self) -> bool {
        self.history.iter().any(|attempt| attempt.correct)
    }

    pub fn was_asked(&self) -> bool {
        self.was_asked
    }

    pub(crate) fn mark_asked(&mut self) {
        self.was_asked = true;
    }
}
