use rand::Rng;

use crate::error::ConfigurationError;

use super::Question;

/// Interchangeable questions of which one is asked per session.
#[derive(Debug, Clone)]
pub struct QuestionGroup {
    name: String,
    questions: Vec<Question>,
    selected: Option<usize>,
}

impl QuestionGroup {
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyGroup`] if `questions` is empty.
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if questions.is_empty() {
            return Err(ConfigurationError::EmptyGroup { group: name });
        }

        Ok(Self {
            name,
            questions,
            selected: None,
        })
    }

    /// Wrap a single question in its own group.
    pub fn single(name: impl Into<String>, question: Question) -> Self {
        Self {
            name: name.into(),
            questions: vec![question],
            selected: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Pick a question uniformly at random and mark it as asked.
    ///
    /// Repeated calls may pick the same question again; the session only
    /// draws once from each group.
    pub fn draw_question<R: Rng>(&mut self, rng: &mut R) -> &mut Question {
        let index = rng.gen_range(0..self.questions.len());
        self.selected = Some(index);

        let question = &mut self.questions[index];
        question.mark_asked();
        question
    }

    /// The question picked by the last draw.
    pub fn selected(&self) -> Option<&Question> {
        self.selected.map(|index| &self.questions[index])
    }

    pub(crate) fn selected_mut(&mut self) -> Option<&mut Question> {
        self.selected.map(|index| &mut self.questions[index])
    }

    pub(crate) fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}
