use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::session::{ExamSession, Phase, EXAM_SECONDS};

use super::format_clock;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    match session.phase() {
        Phase::NotStarted if session.questions().is_empty() => render_empty(frame, area, session),
        Phase::NotStarted => render_intro(frame, area, session),
        _ => render_question(frame, area, app, session),
    }
}

fn render_empty(frame: &mut Frame, area: Rect, session: &ExamSession) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(8),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} EXAM", session.subject().to_uppercase()),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("No questions available for this subject".fg(Color::Red)),
        Line::from(""),
        Line::from("esc back to dashboard".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}

fn render_intro(frame: &mut Frame, area: Rect, session: &ExamSession) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(14),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} EXAM", session.subject().to_uppercase()),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(format!("{} questions", session.total_questions()).fg(Color::Gray)),
        Line::from(format!("{} time limit", format_clock(EXAM_SECONDS)).fg(Color::Gray)),
        Line::from("4 options per question".fg(Color::Gray)),
        Line::from("navigate freely, submit before time runs out".fg(Color::Gray)),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
        Line::from(""),
        Line::from("esc back to dashboard".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}

fn render_question(frame: &mut Frame, area: Rect, app: &App, session: &ExamSession) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_status(frame, chunks[0], session);
    render_progress(frame, chunks[1], session);
    render_question_text(frame, chunks[2], &session.current_question().text);
    render_options(frame, chunks[3], app, session);
    render_controls(frame, chunks[4]);
}

fn render_status(frame: &mut Frame, area: Rect, session: &ExamSession) {
    let seconds = session.seconds_remaining();
    let clock_color = if seconds <= 60 {
        Color::Red
    } else {
        Color::Yellow
    };

    let chunks =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(8)]).split(area);

    let subject = Paragraph::new(session.subject().to_uppercase())
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(subject, chunks[0]);

    let clock = Paragraph::new(format_clock(seconds))
        .alignment(Alignment::Right)
        .fg(clock_color)
        .bold();
    frame.render_widget(clock, chunks[1]);
}

fn render_progress(frame: &mut Frame, area: Rect, session: &ExamSession) {
    let progress = format!(
        "question {}/{}  ·  {} answered",
        session.current_position() + 1,
        session.total_questions(),
        session.answered_count()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App, session: &ExamSession) {
    let recorded = session.answer(session.current_position());
    let options = &session.current_question().options;
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == app.selected_option;
        let is_recorded = recorded == Some(index);

        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else if is_recorded {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        let recorded_mark = if is_recorded { "●" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", marker, recorded_mark), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget =
        Paragraph::new("j/k option  ·  enter answer  ·  h/l question  ·  s submit")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
