use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, LoginField};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(13),
        Constraint::Fill(1),
    ])
    .split(area);

    let email_focused = app.login.field == LoginField::Email;
    let masked: String = "*".repeat(app.login.password.chars().count());

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "EXAM PORTAL",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Sign in to start your exam journey".fg(Color::DarkGray)),
        Line::from(""),
        field_line("email", &app.login.email, email_focused),
        field_line("password", &masked, !email_focused),
        Line::from(""),
    ];

    match &app.login.error {
        Some(error) => content.push(Line::from(error.as_str().fg(Color::Red))),
        None => content.push(Line::from("")),
    }
    content.push(Line::from(""));
    content.push(Line::from(
        "tab switch field  ·  enter sign in  ·  esc quit".fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let style = if focused {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let marker = if focused { ">" } else { " " };
    let cursor = if focused { "_" } else { "" };

    Line::from(vec![
        Span::styled(format!("{} {:>8}: ", marker, label), style),
        Span::styled(format!("{}{}", value, cursor), style),
    ])
}
