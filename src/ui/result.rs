use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::report::{QuestionReport, SessionReport};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let report = app.report();
    let grade_color = get_grade_color(report.percentage());

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], &report, grade_color);
    render_question_review(frame, chunks[2], &report, app);
    render_controls(frame, chunks[3]);
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, report: &SessionReport, grade_color: Color) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({:.0}%)",
                report.total_points,
                report.max_points,
                report.percentage()
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(format!(
            "{} of {} answered correctly",
            report.correct_count(),
            report.questions.len()
        ))
        .fg(Color::DarkGray),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_review(frame: &mut Frame, area: Rect, report: &SessionReport, app: &App) {
    let widget = Paragraph::new(review_lines(report, app.shows_answers()))
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll_offset(app.result_scroll()), 0));
    frame.render_widget(widget, area);
}

fn scroll_offset(scroll: usize) -> u16 {
    u16::try_from(scroll).unwrap_or(u16::MAX)
}

/// Review of every asked question: its attempts and the points it gave.
pub(super) fn review_lines(report: &SessionReport, show_answers: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for question in &report.questions {
        push_question(&mut lines, question, show_answers);
    }
    lines
}

fn push_question(lines: &mut Vec<Line<'static>>, question: &QuestionReport, show_answers: bool) {
    lines.push(Line::from(vec![
        Span::styled(
            format!("{:2}. ", question.number),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(question.text.clone(), Style::default().fg(Color::White).bold()),
    ]));

    for attempt in &question.attempts {
        let (symbol, color) = if attempt.correct {
            ("+", Color::Green)
        } else {
            ("-", Color::Red)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("     {} ", symbol), Style::default().fg(color)),
            Span::styled(attempt.submitted.clone(), Style::default().fg(Color::Gray)),
        ]));
    }

    if show_answers && !question.is_correct() {
        lines.push(Line::from(Span::styled(
            format!("     Accepted: {}", question.accepted_answers.join("  |  ")),
            Style::default().fg(Color::Yellow),
        )));
    }

    lines.push(Line::from(Span::styled(
        format!("     Points {}/{}", question.points_awarded, question.max_points),
        Style::default().fg(Color::Cyan),
    )));
    lines.push(Line::from(""));
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
