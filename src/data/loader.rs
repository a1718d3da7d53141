use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::error::ConfigurationError;
use crate::models::{Answer, DEFAULT_ATTEMPTS, DEFAULT_SCORING, Question, QuestionGroup};

/// Places searched for a question file, relative to the search root.
const QUESTION_FILE_LOCATIONS: [&str; 2] = ["questions.json", "data/questions.json"];

/// Error type for reading question files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse questions: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("no question file found. Searched:\n{}", format_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Question file layout: named groups, or a plain list of questions.
#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionFile {
    Grouped(BTreeMap<String, Vec<RawQuestion>>),
    Flat(Vec<RawQuestion>),
}

#[derive(Deserialize)]
struct RawQuestion {
    text: String,
    prompt: String,
    answers: Vec<RawAnswer>,
    #[serde(default)]
    attempts: Option<u32>,
    #[serde(default)]
    scoring: Option<Vec<u32>>,
}

/// The three ways an answer can be written in a question file.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnswer {
    Text(String),
    Pair(String, bool),
    Detailed {
        text: String,
        #[serde(default)]
        case_sensitive: bool,
    },
}

impl From<RawAnswer> for Answer {
    fn from(raw: RawAnswer) -> Self {
        match raw {
            RawAnswer::Text(text) => Answer::new(text),
            RawAnswer::Pair(text, case_sensitive) | RawAnswer::Detailed { text, case_sensitive } => {
                Answer::with_case(text, case_sensitive)
            }
        }
    }
}

impl RawQuestion {
    fn into_question(self) -> Result<Question, ConfigurationError> {
        let answers = self.answers.into_iter().map(Answer::from).collect();
        let attempts = self.attempts.unwrap_or(DEFAULT_ATTEMPTS);
        let scoring = self.scoring.unwrap_or_else(|| DEFAULT_SCORING.to_vec());

        Question::with_scoring(self.text, self.prompt, answers, attempts, &scoring)
    }
}

/// Parse question groups from JSON text.
///
/// An object maps group names to question lists. A bare list gives every
/// question its own group.
pub fn parse_questions(json: &str) -> Result<Vec<QuestionGroup>, LoadError> {
    let file: QuestionFile = serde_json::from_str(json)?;

    let groups = match file {
        QuestionFile::Grouped(groups) => groups
            .into_iter()
            .map(|(name, questions)| {
                let questions = questions
                    .into_iter()
                    .map(RawQuestion::into_question)
                    .collect::<Result<Vec<_>, _>>()?;
                QuestionGroup::new(name, questions)
            })
            .collect::<Result<Vec<_>, _>>()?,
        QuestionFile::Flat(questions) => questions
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                raw.into_question()
                    .map(|question| QuestionGroup::single((index + 1).to_string(), question))
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    Ok(groups)
}

/// Load question groups from a JSON file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<QuestionGroup>, LoadError> {
    let path = path.as_ref();

    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let groups = parse_questions(&json)?;

    info!(path = %path.display(), groups = groups.len(), "loaded question file");
    Ok(groups)
}

/// Find the first existing question file under `root`.
pub fn find_question_file<P: AsRef<Path>>(root: P) -> Result<PathBuf, LoadError> {
    let root = root.as_ref();
    let mut searched = Vec::with_capacity(QUESTION_FILE_LOCATIONS.len());

    for location in QUESTION_FILE_LOCATIONS {
        let path = root.join(location);
        debug!(path = %path.display(), "looking for question file");
        if path.is_file() {
            return Ok(path);
        }
        searched.push(path);
    }

    Err(LoadError::NotFound { searched })
}
