mod loader;

pub use loader::{LoadError, find_question_file, load_questions_from_json, parse_questions};
