use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, Feedback};
use crate::models::Question;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.quizzer().current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(4),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_status(frame, chunks[0], app, question);
    render_heading(frame, chunks[1], app);
    render_question_text(frame, chunks[2], question.text());
    render_input(frame, chunks[3], question.prompt(), app.input());
    render_feedback(frame, chunks[4], app.feedback());
    render_controls(frame, chunks[5]);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App, question: &Question) {
    let (asked, total) = app.quizzer().progress();
    let status = format!(
        "{}/{}  ·  Attempts left: {}  ·  Points: {}",
        asked,
        total,
        question.attempts_remaining(),
        app.quizzer().points()
    );
    let widget = Paragraph::new(status)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_heading(frame: &mut Frame, area: Rect, app: &App) {
    let heading = format!("Question {}", app.quizzer().question_number());
    let widget = Paragraph::new(heading).fg(Color::Cyan).bold();
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_input(frame: &mut Frame, area: Rect, prompt: &str, input: &str) {
    let line = Line::from(vec![
        Span::styled(format!("{} ", prompt), Style::default().fg(Color::Gray)),
        Span::styled(input, Style::default().fg(Color::Yellow)),
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: Option<Feedback>) {
    let (text, color) = match feedback {
        Some(Feedback::Correct) => ("Correct", Color::Green),
        Some(Feedback::Wrong) => ("Wrong", Color::Red),
        Some(Feedback::EmptyInput) => ("Type an answer first", Color::Yellow),
        None => ("", Color::Reset),
    };
    frame.render_widget(Paragraph::new(text).fg(color).bold(), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("enter submit  ·  esc quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
