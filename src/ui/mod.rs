mod dashboard;
mod exam;
mod login;
mod results;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Login => login::render(frame, area, app),
        Screen::Dashboard => dashboard::render(frame, area, app),
        Screen::Exam => exam::render(frame, area, app),
        Screen::Results => results::render(frame, area, app),
    }
}

/// Format seconds as mm:ss.
pub(crate) fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
