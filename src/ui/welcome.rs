use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::quizzer::SessionMode;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Fill(1),
    ])
    .split(area);

    let (_, total) = app.quizzer().progress();
    let description = match app.quizzer().mode() {
        SessionMode::OnePerGroup => format!("{} questions · one per topic", total),
        SessionMode::Flat { .. } => format!("{} questions", total),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "CMD QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(description, Style::default().fg(Color::DarkGray))),
        Line::from("Type the command, press enter".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start  ·  q to quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
