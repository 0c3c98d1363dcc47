use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::bank::SubjectInfo;
use crate::stats;

const RECENT_RESULTS: usize = 5;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(RECENT_RESULTS as u16 + 3),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], app);
    render_subjects(frame, chunks[1], app);
    render_recent(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let name = app.user.as_ref().map(|u| u.name.as_str()).unwrap_or("");

    let summary = match stats::overall(app.result_log()) {
        Some(overall) => format!(
            "{} exams taken  ·  average {:.0}%  ·  best {:.0}%",
            overall.total_exams, overall.average_percent, overall.best_percent
        ),
        None => "No exams taken yet".to_string(),
    };

    let content = vec![
        Line::from(vec![
            Span::styled("EXAM PORTAL", Style::default().fg(Color::Cyan).bold()),
            Span::styled(format!("  ·  welcome, {}", name), Style::default().fg(Color::Gray)),
        ]),
        Line::from(summary.fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_subjects(frame: &mut Frame, area: Rect, app: &App) {
    let results = app.result_log();
    let mut lines: Vec<Line> = vec![Line::from("")];

    for (index, subject) in app.bank().subjects().iter().enumerate() {
        let is_selected = index == app.selected_subject;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        let difficulty = SubjectInfo::lookup(subject)
            .map(|info| info.difficulty)
            .unwrap_or("-");

        let stats_text = match stats::stats_for(subject, results) {
            Some(s) => format!(
                "attempts {}  ·  best {}  ·  avg {:.1}",
                s.attempts, s.best_score, s.average_score
            ),
            None => "not attempted".to_string(),
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{:<10}", subject), style),
            Span::styled(format!("{:<14}", difficulty), Style::default().fg(Color::DarkGray)),
            Span::styled(stats_text, Style::default().fg(Color::DarkGray)),
        ]));

        if is_selected {
            if let Some(info) = SubjectInfo::lookup(subject) {
                lines.push(Line::from(Span::styled(
                    format!("   {}", info.description),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_recent(frame: &mut Frame, area: Rect, app: &App) {
    let results = app.result_log();

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        "RECENT RESULTS",
        Style::default().fg(Color::Cyan),
    ))];

    if results.is_empty() {
        lines.push(Line::from("nothing here yet".fg(Color::DarkGray)));
    } else {
        for result in results.iter().rev().take(RECENT_RESULTS) {
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<10}", result.subject), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{:>2}/{:<2}  ({:.0}%)  ", result.score, result.total_questions, result.percentage()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(result.date_taken.as_str(), Style::default().fg(Color::DarkGray)),
            ]));
        }
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter start exam  ·  L logout  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
