//! # exam-portal
//!
//! A terminal exam application: sign in, pick a subject, answer a timed
//! 20-question multiple-choice exam, and review scored results with
//! per-question feedback. Everything is local; results persist in a data
//! directory between runs.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use exam_portal::{Portal, PortalError};
//!
//! fn main() -> Result<(), PortalError> {
//!     // Question bank: a JSON map of subject -> questions.
//!     let portal = Portal::open("questions.json", ".exam-portal")?;
//!
//!     // Take over the terminal and run the portal UI.
//!     portal.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod bank;
mod error;
mod models;
pub mod review;
pub mod session;
pub mod stats;
pub mod store;
pub mod terminal;
mod ui;

use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, Screen};
pub use bank::QuestionBank;
pub use error::{BankError, PortalError, SessionError, StorageError};
pub use models::{AnswerMap, ExamResult, Question, User};

use session::Phase;
use store::FileStorage;

/// A portal instance that can be run in the terminal.
pub struct Portal {
    app: App,
}

impl Portal {
    /// Open the portal: load the question bank and attach file-backed
    /// storage under `data_dir`.
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(
        questions: P,
        data_dir: Q,
    ) -> Result<Self, PortalError> {
        let bank = QuestionBank::from_json(questions)?;
        let storage = FileStorage::open(data_dir.as_ref())?;
        let app = App::new(bank, Box::new(storage.clone()), Box::new(storage))?;
        Ok(Self { app })
    }

    /// Run the portal in the terminal.
    ///
    /// Takes over the terminal, drives the UI and the exam clock on one
    /// cooperative loop, and returns when the user quits.
    pub fn run(mut self) -> Result<(), PortalError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(
    terminal: &mut terminal::PortalTerminal,
    app: &mut App,
) -> Result<(), PortalError> {
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Input and the countdown share this loop; polling with the time
        // budget left until the next tick keeps both responsive.
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_input(app, key.code)? {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick()?;
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> Result<bool, PortalError> {
    match app.screen {
        Screen::Login => handle_login_input(app, key),
        Screen::Dashboard => handle_dashboard_input(app, key),
        Screen::Exam => handle_exam_input(app, key),
        Screen::Results => handle_results_input(app, key),
    }
}

fn handle_login_input(app: &mut App, key: KeyCode) -> Result<bool, PortalError> {
    match key {
        KeyCode::Esc => return Ok(true),
        KeyCode::Tab => app.login_next_field(),
        KeyCode::Backspace => app.login_input_pop(),
        KeyCode::Enter => app.submit_login()?,
        KeyCode::Char(c) => app.login_input_push(c),
        _ => {}
    }
    Ok(false)
}

fn handle_dashboard_input(app: &mut App, key: KeyCode) -> Result<bool, PortalError> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_subject(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_subject(),
        KeyCode::Enter => app.begin_exam(),
        KeyCode::Char('L') => app.logout()?,
        _ => {}
    }
    Ok(false)
}

fn handle_exam_input(app: &mut App, key: KeyCode) -> Result<bool, PortalError> {
    let phase = match app.session() {
        Some(session) => session.phase(),
        None => return Ok(false),
    };

    match phase {
        Phase::NotStarted => match key {
            KeyCode::Enter => app.start_exam()?,
            KeyCode::Esc => app.cancel_exam(),
            KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
            _ => {}
        },
        Phase::InProgress => match key {
            KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
            KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
            KeyCode::Enter | KeyCode::Char(' ') => app.record_current_answer()?,
            KeyCode::Right | KeyCode::Char('l') => app.next_question()?,
            KeyCode::Left | KeyCode::Char('h') => app.previous_question()?,
            KeyCode::Char('s') | KeyCode::Char('S') => app.submit_exam()?,
            KeyCode::Char(c @ '0'..='9') => {
                // 1-9 jump to the first nine questions, 0 to the tenth.
                let position = if c == '0' { 9 } else { c as usize - '1' as usize };
                app.go_to_question(position)?;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                // Leaving mid-exam still finalizes and persists the attempt.
                app.submit_exam()?;
                return Ok(true);
            }
            _ => {}
        },
        // The screen flips to Results on submission; nothing to handle.
        Phase::Submitted => {}
    }
    Ok(false)
}

fn handle_results_input(app: &mut App, key: KeyCode) -> Result<bool, PortalError> {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_review_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_review_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.retake_exam(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.back_to_dashboard(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::store::MemoryStorage;

    use super::*;

    fn in_progress_app(pool_size: u32) -> App {
        let pool: Vec<Question> = (0..pool_size)
            .map(|id| Question {
                id,
                text: format!("Question {}", id),
                options: [
                    "a".to_string(),
                    "b".to_string(),
                    "c".to_string(),
                    "d".to_string(),
                ],
                correct_answer: 0,
            })
            .collect();
        let mut subjects = HashMap::new();
        subjects.insert("HTML".to_string(), pool);

        let storage = MemoryStorage::new();
        let mut app = App::new(
            QuestionBank::new(subjects).unwrap(),
            Box::new(storage.clone()),
            Box::new(storage),
        )
        .unwrap();

        app.login.email = "alice@example.com".to_string();
        app.login.password = "secret".to_string();
        app.submit_login().unwrap();
        app.begin_exam();
        app.start_exam().unwrap();
        app
    }

    #[test]
    fn test_quit_mid_exam_persists_the_attempt() {
        let mut app = in_progress_app(5);
        app.record_current_answer().unwrap();

        let quit = handle_input(&mut app, KeyCode::Char('q')).unwrap();
        assert!(quit);
        assert_eq!(app.result_log().len(), 1);
        assert_eq!(app.result_log()[0].score, 1);
    }

    #[test]
    fn test_digit_keys_jump_to_questions() {
        let mut app = in_progress_app(30);

        handle_input(&mut app, KeyCode::Char('4')).unwrap();
        assert_eq!(app.session().unwrap().current_position(), 3);

        handle_input(&mut app, KeyCode::Char('0')).unwrap();
        assert_eq!(app.session().unwrap().current_position(), 9);
    }
}
