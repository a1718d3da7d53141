//! Session state machine.
//!
//! A [`Quizzer`] owns the whole question corpus for one session. It keeps
//! the groups that were not asked yet, the groups already asked (in order)
//! and the running score. The only way to move the session forward is
//! [`Quizzer::attempt_answer`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::ConfigurationError;
use crate::models::{Question, QuestionGroup};

/// How a session picks its questions from the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Ask exactly one question from every group.
    OnePerGroup,
    /// Ignore grouping and ask `count` distinct questions.
    Flat { count: usize },
}

impl Default for SessionMode {
    fn default() -> Self {
        Self::OnePerGroup
    }
}

/// Drives one quiz session from the first question to the end.
#[derive(Debug)]
pub struct Quizzer<R = StdRng> {
    mode: SessionMode,
    pending: Vec<QuestionGroup>,
    asked: Vec<QuestionGroup>,
    target: usize,
    points_gained: u32,
    ended: bool,
    rng: R,
}

impl Quizzer<StdRng> {
    /// Start a session with an OS-seeded random source.
    pub fn from_entropy(
        groups: Vec<QuestionGroup>,
        mode: SessionMode,
    ) -> Result<Self, ConfigurationError> {
        Self::new(groups, mode, StdRng::from_entropy())
    }

    /// Start a session whose draws are fully determined by `seed`.
    pub fn seeded(
        groups: Vec<QuestionGroup>,
        mode: SessionMode,
        seed: u64,
    ) -> Result<Self, ConfigurationError> {
        Self::new(groups, mode, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Quizzer<R> {
    /// Start a session and activate its first question.
    ///
    /// If there is nothing to ask the session is ended right away.
    ///
    /// # Errors
    ///
    /// In [`SessionMode::Flat`] mode, returns
    /// [`ConfigurationError::NotEnoughQuestions`] when the corpus holds fewer
    /// questions than requested.
    pub fn new(
        groups: Vec<QuestionGroup>,
        mode: SessionMode,
        rng: R,
    ) -> Result<Self, ConfigurationError> {
        let (pending, target) = match mode {
            SessionMode::OnePerGroup => {
                let target = groups.len();
                (groups, target)
            }
            SessionMode::Flat { count } => {
                let pending = flatten(groups);
                if pending.len() < count {
                    return Err(ConfigurationError::NotEnoughQuestions {
                        requested: count,
                        available: pending.len(),
                    });
                }
                (pending, count)
            }
        };

        debug!(?mode, pool = pending.len(), target, "starting quiz session");

        let mut quizzer = Self {
            mode,
            pending,
            asked: Vec::with_capacity(target),
            target,
            points_gained: 0,
            ended: false,
            rng,
        };
        quizzer.advance();
        Ok(quizzer)
    }

    /// Submit an answer for the current question.
    ///
    /// A correct answer adds its points and moves on. A wrong answer keeps
    /// the question active while it has attempts left, otherwise the session
    /// moves on without points. Once the session has ended this does nothing
    /// and returns `false`.
    pub fn attempt_answer(&mut self, submitted: &str) -> bool {
        if self.ended {
            return false;
        }
        let Some(question) = self.asked.last_mut().and_then(QuestionGroup::selected_mut) else {
            return false;
        };

        let (correct, points) = question.attempt(submitted);
        let remaining = question.attempts_remaining();
        debug!(correct, points, remaining, "answer attempted");

        if correct {
            self.points_gained = self.points_gained.saturating_add(points);
            self.advance();
        } else if remaining == 0 {
            self.advance();
        }

        correct
    }

    fn advance(&mut self) {
        if self.asked.len() >= self.target || self.pending.is_empty() {
            self.ended = true;
            info!(
                points = self.points_gained,
                asked = self.asked.len(),
                "quiz session ended"
            );
            return;
        }

        let index = self.rng.gen_range(0..self.pending.len());
        let mut group = self.pending.swap_remove(index);
        group.draw_question(&mut self.rng);

        if let Some(question) = group.selected() {
            debug!(
                group = group.name(),
                question = question.text(),
                number = self.asked.len() + 1,
                "activated question"
            );
        }
        self.asked.push(group);
    }
}

impl<R> Quizzer<R> {
    /// The question awaiting an answer, or the last one asked once ended.
    ///
    /// `None` only when the session had nothing to ask.
    pub fn current_question(&self) -> Option<&Question> {
        self.asked.last().and_then(QuestionGroup::selected)
    }

    pub fn points(&self) -> u32 {
        self.points_gained
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// `(asked, total)` question counts.
    pub fn progress(&self) -> (usize, usize) {
        (self.asked.len(), self.target)
    }

    /// 1-based number of the current question.
    pub fn question_number(&self) -> usize {
        self.asked.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Questions asked so far, in the order they were asked.
    pub fn asked_questions(&self) -> impl Iterator<Item = &Question> + '_ {
        self.asked.iter().filter_map(QuestionGroup::selected)
    }
}

fn flatten(groups: Vec<QuestionGroup>) -> Vec<QuestionGroup> {
    groups
        .into_iter()
        .flat_map(|group| {
            let name = group.name().to_string();
            group
                .into_questions()
                .into_iter()
                .enumerate()
                .map(move |(index, question)| {
                    QuestionGroup::single(format!("{}/{}", name, index + 1), question)
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answer;

    fn group(name: &str, texts: &[&str]) -> QuestionGroup {
        let questions = texts
            .iter()
            .map(|text| Question::new(*text, ">", vec![Answer::new("yes")]).unwrap())
            .collect();
        QuestionGroup::new(name, questions).unwrap()
    }

    fn single_attempt_group(name: &str) -> QuestionGroup {
        let question =
            Question::with_scoring(name, ">", vec![Answer::new("42")], 1, &[2, 1]).unwrap();
        QuestionGroup::single(name, question)
    }

    #[test]
    fn test_first_question_is_active_after_construction() {
        let quizzer =
            Quizzer::seeded(vec![group("a", &["a1"]), group("b", &["b1"])], SessionMode::OnePerGroup, 1)
                .unwrap();

        assert!(!quizzer.is_ended());
        assert_eq!(quizzer.progress(), (1, 2));
        assert_eq!(quizzer.pending_count(), 1);
        assert!(quizzer.current_question().unwrap().was_asked());
    }

    #[test]
    fn test_one_question_per_group_scenario() {
        let groups = vec![
            single_attempt_group("first"),
            single_attempt_group("second"),
            single_attempt_group("third"),
        ];
        let mut quizzer = Quizzer::seeded(groups, SessionMode::OnePerGroup, 3).unwrap();

        for _ in 0..3 {
            assert!(!quizzer.is_ended());
            assert!(quizzer.attempt_answer("42"));
        }

        assert!(quizzer.is_ended());
        assert_eq!(quizzer.points(), 6);
        assert_eq!(quizzer.pending_count(), 0);
        assert_eq!(quizzer.asked_questions().count(), 3);
    }

    #[test]
    fn test_wrong_answer_keeps_question_until_exhausted() {
        let mut quizzer =
            Quizzer::seeded(vec![group("a", &["a1"]), group("b", &["b1"])], SessionMode::OnePerGroup, 9)
                .unwrap();
        let first = quizzer.current_question().unwrap().text().to_string();

        assert!(!quizzer.attempt_answer("no"));
        assert_eq!(quizzer.current_question().unwrap().text(), first);
        assert_eq!(quizzer.current_question().unwrap().attempts_remaining(), 1);

        assert!(!quizzer.attempt_answer("still no"));
        assert_ne!(quizzer.current_question().unwrap().text(), first);
        assert_eq!(quizzer.points(), 0);
        assert_eq!(quizzer.progress(), (2, 2));
    }

    #[test]
    fn test_second_attempt_points() {
        let mut quizzer =
            Quizzer::seeded(vec![group("a", &["a1"])], SessionMode::OnePerGroup, 0).unwrap();

        assert!(!quizzer.attempt_answer("no"));
        assert!(quizzer.attempt_answer("YES"));
        assert!(quizzer.is_ended());
        assert_eq!(quizzer.points(), 1);
    }

    #[test]
    fn test_ended_session_ignores_answers() {
        let mut quizzer =
            Quizzer::seeded(vec![group("a", &["a1"])], SessionMode::OnePerGroup, 0).unwrap();
        assert!(quizzer.attempt_answer("yes"));
        assert!(quizzer.is_ended());

        assert!(!quizzer.attempt_answer("yes"));
        assert_eq!(quizzer.points(), 2);
        let last = quizzer.current_question().unwrap();
        assert_eq!(last.text(), "a1");
        assert_eq!(last.history().len(), 1);
    }

    #[test]
    fn test_every_group_asked_once() {
        let groups: Vec<_> = (0..8)
            .map(|i| group(&format!("g{i}"), &["x", "y", "z"]))
            .collect();
        let mut quizzer = Quizzer::seeded(groups, SessionMode::OnePerGroup, 11).unwrap();

        let mut answered = 0;
        while !quizzer.is_ended() {
            quizzer.attempt_answer("yes");
            answered += 1;
        }

        assert_eq!(answered, 8);
        assert_eq!(quizzer.progress(), (8, 8));
        assert_eq!(quizzer.pending_count(), 0);
        assert!(
            quizzer
                .asked_questions()
                .all(|q| q.was_asked() && !q.history().is_empty())
        );
    }

    #[test]
    fn test_empty_corpus_ends_immediately() {
        let mut quizzer = Quizzer::seeded(Vec::new(), SessionMode::OnePerGroup, 0).unwrap();
        assert!(quizzer.is_ended());
        assert!(quizzer.current_question().is_none());
        assert_eq!(quizzer.progress(), (0, 0));
        assert!(!quizzer.attempt_answer("anything"));
    }

    #[test]
    fn test_flat_mode_stops_at_count() {
        let groups = vec![group("a", &["a1", "a2", "a3"]), group("b", &["b1", "b2"])];
        let mut quizzer = Quizzer::seeded(groups, SessionMode::Flat { count: 3 }, 5).unwrap();
        assert_eq!(quizzer.progress(), (1, 3));

        while !quizzer.is_ended() {
            quizzer.attempt_answer("yes");
        }

        assert_eq!(quizzer.progress(), (3, 3));
        assert_eq!(quizzer.pending_count(), 2);
        assert_eq!(quizzer.points(), 6);

        let mut texts: Vec<_> = quizzer.asked_questions().map(|q| q.text()).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), 3);
    }

    #[test]
    fn test_flat_mode_needs_enough_questions() {
        let err = Quizzer::seeded(vec![group("a", &["a1", "a2"])], SessionMode::Flat { count: 3 }, 0)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::NotEnoughQuestions {
                requested: 3,
                available: 2
            }
        );
    }

    #[test]
    fn test_same_seed_same_order() {
        let corpus = || {
            (0..6)
                .map(|i| single_attempt_group(&format!("q{i}")))
                .collect::<Vec<_>>()
        };
        let order = |seed| {
            let mut quizzer = Quizzer::seeded(corpus(), SessionMode::OnePerGroup, seed).unwrap();
            let mut order = Vec::new();
            while let Some(question) = quizzer.current_question() {
                if quizzer.is_ended() {
                    break;
                }
                order.push(question.text().to_string());
                quizzer.attempt_answer("42");
            }
            order
        };

        assert_eq!(order(17), order(17));

        let orders: Vec<_> = (0..10).map(order).collect();
        assert!(orders.iter().any(|o| *o != orders[0]));
    }

    #[test]
    fn test_flat_mode_zero_count_ends_immediately() {
        let mut quizzer =
            Quizzer::seeded(vec![group("a", &["a1", "a2"])], SessionMode::Flat { count: 0 }, 0)
                .unwrap();

        assert!(quizzer.is_ended());
        assert!(quizzer.current_question().is_none());
        assert_eq!(quizzer.progress(), (0, 0));
        assert_eq!(quizzer.pending_count(), 2);
        assert!(!quizzer.attempt_answer("yes"));
    }

    #[test]
    fn test_points_saturate_instead_of_overflowing() {
        let groups = (0..2)
            .map(|i| {
                let question = Question::with_scoring(
                    format!("big {i}"),
                    ">",
                    vec![Answer::new("yes")],
                    1,
                    &[4_000_000_000],
                )
                .unwrap();
                QuestionGroup::single(format!("g{i}"), question)
            })
            .collect();
        let mut quizzer = Quizzer::seeded(groups, SessionMode::OnePerGroup, 0).unwrap();

        assert!(quizzer.attempt_answer("yes"));
        assert!(quizzer.attempt_answer("yes"));
        assert!(quizzer.is_ended());
        assert_eq!(quizzer.points(), u32::MAX);
    }
}
