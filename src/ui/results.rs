use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::review::{grade, ReviewEntry};

const QUESTION_PREVIEW_LENGTH: usize = 55;
const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_summary(frame, chunks[0], app);
    render_breakdown(frame, chunks[1], app.review_entries(), app.review_scroll);
    render_controls(frame, chunks[2]);
}

fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.last_result() else {
        return;
    };
    let percentage = result.percentage();
    let color = grade_color(percentage);

    let mut content = vec![
        Line::from(Span::styled(
            format!("{} RESULTS", result.subject.to_uppercase()),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({:.0}%)  ·  grade {}",
                result.score,
                result.total_questions,
                percentage,
                grade(percentage)
            ),
            Style::default().fg(color).bold(),
        )),
    ];

    match &app.save_error {
        Some(warning) => content.push(Line::from(Span::styled(
            format!("! {}", warning),
            Style::default().fg(Color::Red),
        ))),
        None => content.push(Line::from(result.date_taken.as_str().fg(Color::DarkGray))),
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        80..=100 => Color::Green,
        60..=79 => Color::Cyan,
        50..=59 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_breakdown(frame: &mut Frame, area: Rect, entries: &[ReviewEntry], scroll: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(entries.len() * 2);

    for (index, entry) in entries.iter().enumerate() {
        let (symbol, color) = if entry.is_correct {
            ("+", Color::Green)
        } else {
            ("-", Color::Red)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                format!("{:2}. ", index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                truncate_question(&entry.question.text),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(detail_line(entry));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll(((scroll * 2) as u16, 0));
    frame.render_widget(widget, area);
}

fn detail_line(entry: &ReviewEntry) -> Line<'static> {
    let correct = OPTION_LABELS[entry.question.correct_answer];
    let text = match entry.chosen {
        Some(chosen) if entry.is_correct => format!("       answered {}", OPTION_LABELS[chosen]),
        Some(chosen) => format!(
            "       answered {}  ·  correct {}",
            OPTION_LABELS[chosen], correct
        ),
        None => format!("       not answered  ·  correct {}", correct),
    };
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r retake  ·  d dashboard  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
