//! End-of-session review.

use crate::models::{Attempt, Question};
use crate::quizzer::Quizzer;

/// Review line for one asked question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReport {
    /// 1-based position in the session.
    pub number: usize,
    pub text: String,
    pub accepted_answers: Vec<String>,
    pub attempts: Vec<Attempt>,
    pub points_awarded: u32,
    pub max_points: u32,
}

impl QuestionReport {
    fn from_question(number: usize, question: &Question) -> Self {
        Self {
            number,
            text: question.text().to_string(),
            accepted_answers: question
                .answers()
                .iter()
                .map(|answer| answer.text().to_string())
                .collect(),
            attempts: question.history().to_vec(),
            points_awarded: question.points_awarded().unwrap_or(0),
            max_points: question.max_points(),
        }
    }

    pub fn is_correct(&self) -> bool {
        self.attempts.iter().any(|attempt| attempt.correct)
    }
}

/// Summary of a session: every asked question and the totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub questions: Vec<QuestionReport>,
    pub total_points: u32,
    pub max_points: u32,
}

impl SessionReport {
    pub fn from_quizzer<R>(quizzer: &Quizzer<R>) -> Self {
        let questions: Vec<QuestionReport> = quizzer
            .asked_questions()
            .enumerate()
            .map(|(index, question)| QuestionReport::from_question(index + 1, question))
            .collect();
        let max_points = questions
            .iter()
            .map(|q| q.max_points)
            .fold(0, u32::saturating_add);

        Self {
            questions,
            total_points: quizzer.points(),
            max_points,
        }
    }

    pub fn correct_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_correct()).count()
    }

    pub fn percentage(&self) -> f64 {
        if self.max_points > 0 {
            (self.total_points as f64 / self.max_points as f64) * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, QuestionGroup};
    use crate::quizzer::SessionMode;

    fn corpus() -> Vec<QuestionGroup> {
        ["ver", "cls", "dir"]
            .into_iter()
            .map(|command| {
                let question =
                    Question::with_scoring(command, "C:\\>", vec![Answer::new(command)], 2, &[3, 1])
                        .unwrap();
                QuestionGroup::single(command, question)
            })
            .collect()
    }

    #[test]
    fn test_report_follows_ask_order() {
        let mut quizzer = Quizzer::seeded(corpus(), SessionMode::OnePerGroup, 21).unwrap();
        let mut order = Vec::new();

        // first question right, second on retry, third never
        let first = quizzer.current_question().unwrap().text().to_string();
        order.push(first.clone());
        quizzer.attempt_answer(&first);

        let second = quizzer.current_question().unwrap().text().to_string();
        order.push(second.clone());
        quizzer.attempt_answer("nope");
        quizzer.attempt_answer(&second);

        order.push(quizzer.current_question().unwrap().text().to_string());
        quizzer.attempt_answer("nope");
        quizzer.attempt_answer("nope");
        assert!(quizzer.is_ended());

        let report = SessionReport::from_quizzer(&quizzer);
        let texts: Vec<_> = report.questions.iter().map(|q| q.text.clone()).collect();
        assert_eq!(texts, order);

        let points: Vec<_> = report.questions.iter().map(|q| q.points_awarded).collect();
        assert_eq!(points, vec![3, 1, 0]);
        assert_eq!(report.total_points, 4);
        assert_eq!(report.max_points, 9);
        assert_eq!(report.correct_count(), 2);
        assert_eq!(report.questions[1].attempts.len(), 2);
        assert_eq!(report.questions[2].number, 3);
    }

    #[test]
    fn test_large_scores_saturate() {
        let groups = (0..2)
            .map(|i| {
                let question =
                    Question::with_scoring(format!("q{i}"), ">", vec![Answer::new("ok")], 1, &[4_000_000_000])
                        .unwrap();
                QuestionGroup::single(format!("g{i}"), question)
            })
            .collect();
        let mut quizzer = Quizzer::seeded(groups, SessionMode::OnePerGroup, 3).unwrap();
        quizzer.attempt_answer("ok");
        quizzer.attempt_answer("ok");

        let report = SessionReport::from_quizzer(&quizzer);
        assert_eq!(report.total_points, u32::MAX);
        assert_eq!(report.max_points, u32::MAX);
        assert_eq!(report.percentage(), 100.0);
    }

    #[test]
    fn test_empty_session_report() {
        let quizzer = Quizzer::seeded(Vec::new(), SessionMode::OnePerGroup, 0).unwrap();
        let report = SessionReport::from_quizzer(&quizzer);
        assert!(report.questions.is_empty());
        assert_eq!(report.percentage(), 0.0);
    }
}
