use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use clap::Parser;
use cmd_quiz::{App, Quiz, QuizError, SessionMode, find_question_file, load_questions_from_json};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Terminal quiz with free-text answers", long_about = None)]
struct Args {
    /// JSON file to load the questions from (searched for under --root when omitted)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Directory searched for questions.json or data/questions.json
    #[arg(long)]
    root: Option<PathBuf>,

    /// Ask this many questions regardless of grouping
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for reproducible question order
    #[arg(long)]
    seed: Option<u64>,

    /// List the accepted answers of missed questions in the results
    #[arg(long)]
    show_answers: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), QuizError> {
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let path = match args.questions {
        Some(path) => path,
        None => find_question_file(args.root.unwrap_or_else(default_root))?,
    };
    let groups = load_questions_from_json(&path)?;

    let mode = match args.count {
        Some(count) => SessionMode::Flat { count },
        None => SessionMode::OnePerGroup,
    };
    let app = match args.seed {
        Some(seed) => App::with_seed(groups, mode, seed)?,
        None => App::new(groups, mode)?,
    };

    Quiz::from_app(app.with_answer_reveal(args.show_answers)).run()
}

/// Directory of the executable, or the working directory if unknown.
fn default_root() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn init_logging(path: &Path) -> Result<(), QuizError> {
    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cmd_quiz=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
