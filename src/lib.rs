//! # cmd-quiz
//!
//! A quiz engine for free-text questions, with a terminal front end.
//!
//! Questions come in groups of interchangeable variants. A session asks one
//! question per group (or a fixed number of questions in flat mode), allows a
//! configurable number of attempts per question and scores each correct
//! answer by the attempt it took.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cmd_quiz::{Quiz, QuizError, SessionMode};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load questions from a JSON file
//!     let quiz = Quiz::from_json("questions.json", SessionMode::OnePerGroup)?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The engine can also be driven directly:
//!
//! ```rust
//! use cmd_quiz::{Answer, Question, QuestionGroup, Quizzer, SessionMode};
//!
//! let question = Question::new("Show the DOS version", "C:\\>", vec![Answer::new("ver")])?;
//! let groups = vec![QuestionGroup::single("system", question)];
//! let mut quizzer = Quizzer::seeded(groups, SessionMode::OnePerGroup, 7)?;
//!
//! assert!(quizzer.attempt_answer("VER"));
//! assert!(quizzer.is_ended());
//! assert_eq!(quizzer.points(), 2);
//! # Ok::<(), cmd_quiz::ConfigurationError>(())
//! ```

mod app;
mod data;
mod error;
mod models;
mod quizzer;
mod report;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;

pub use app::{App, Feedback};
pub use data::{LoadError, find_question_file, load_questions_from_json, parse_questions};
pub use error::ConfigurationError;
pub use models::{
    Answer, AppState, Attempt, DEFAULT_ATTEMPTS, DEFAULT_SCORING, Question, QuestionGroup,
};
pub use quizzer::{Quizzer, SessionMode};
pub use report::{QuestionReport, SessionReport};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error("Invalid quiz setup: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz over the given question groups.
    pub fn new(groups: Vec<QuestionGroup>, mode: SessionMode) -> Result<Self, QuizError> {
        Ok(Self {
            app: App::new(groups, mode)?,
        })
    }

    /// Wrap an already configured app.
    pub fn from_app(app: App) -> Self {
        Self { app }
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use cmd_quiz::{Quiz, SessionMode};
    ///
    /// let quiz = Quiz::from_json("questions.json", SessionMode::Flat { count: 10 })
    ///     .expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, mode: SessionMode) -> Result<Self, QuizError> {
        let groups = load_questions_from_json(path)?;
        Self::new(groups, mode)
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut session = terminal::TerminalSession::start()?;
        run_event_loop(session.terminal(), &mut self.app)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key)? {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool, QuizError> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    let quit = match app.state {
        AppState::Welcome => handle_welcome_input(app, key.code),
        AppState::Quiz => handle_quiz_input(app, key.code),
        AppState::Result => handle_result_input(app, key.code)?,
    };
    Ok(quit)
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(c) => {
            app.push_char(c);
            false
        }
        KeyCode::Backspace => {
            app.pop_char();
            false
        }
        KeyCode::Enter => {
            app.submit_answer();
            false
        }
        KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> Result<bool, QuizError> {
    let quit = match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart()?;
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    };
    Ok(quit)
}
