mod quiz;
mod result;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Welcome => welcome::render(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
    }
}

/// Number of lines in the question review on the result screen.
pub fn review_line_count(app: &App) -> usize {
    result::review_lines(&app.report(), app.shows_answers()).len()
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::models::{Answer, Question, QuestionGroup};
    use crate::quizzer::SessionMode;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        let question = Question::new(
            "List the files of the current directory",
            "C:\\>",
            vec![Answer::new("dir")],
        )
        .unwrap();
        App::with_seed(
            vec![QuestionGroup::single("files", question)],
            SessionMode::OnePerGroup,
            0,
        )
        .unwrap()
    }

    #[test]
    fn test_quiz_screen_shows_question_and_input() {
        let mut app = app();
        app.start_quiz();
        app.push_char('d');
        app.push_char('i');

        let text = screen_text(&app);
        assert!(text.contains("List the files of the current directory"));
        assert!(text.contains("C:\\> di"));
        assert!(text.contains("Attempts left: 2"));
    }

    #[test]
    fn test_result_screen_shows_review() {
        let mut app = app();
        app.start_quiz();
        app.push_char('d');
        app.push_char('i');
        app.push_char('r');
        app.submit_answer();

        let text = screen_text(&app);
        assert!(text.contains("RESULTS"));
        assert!(text.contains("2 / 2"));
        assert!(text.contains("Points 2/2"));
    }
}
