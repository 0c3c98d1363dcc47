//! Application state: one screen enum, one controller.
//!
//! The controller owns the question bank, the two stores, and the active
//! exam session. The UI layer only reads from it; every mutation goes
//! through a method here.

use crate::bank::QuestionBank;
use crate::error::PortalError;
use crate::models::{ExamResult, User, OPTION_COUNT};
use crate::review::{self, ReviewEntry};
use crate::session::{self, ExamSession, Phase, EXAM_SIZE};
use crate::store::{ResultStore, Storage, UserStore};

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    Exam,
    Results,
}

/// Which login field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// The login form's editable state.
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub field: LoginField,
    pub error: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            field: LoginField::Email,
            error: None,
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub login: LoginForm,
    pub user: Option<User>,
    pub selected_subject: usize,
    pub selected_option: usize,
    pub review_scroll: usize,
    pub save_error: Option<String>,
    bank: QuestionBank,
    users: UserStore,
    results: ResultStore,
    result_log: Vec<ExamResult>,
    session: Option<ExamSession>,
    last_result: Option<ExamResult>,
    review: Vec<ReviewEntry>,
}

impl App {
    /// Build the app over a loaded bank and storage media, resuming the
    /// stored user session if one exists.
    pub fn new(
        bank: QuestionBank,
        user_storage: Box<dyn Storage>,
        result_storage: Box<dyn Storage>,
    ) -> Result<Self, PortalError> {
        let users = UserStore::new(user_storage);
        let results = ResultStore::new(result_storage);

        let user = users.current()?;
        let result_log = results.list_all()?;
        let screen = if user.is_some() {
            Screen::Dashboard
        } else {
            Screen::Login
        };

        Ok(Self {
            screen,
            login: LoginForm::default(),
            user,
            selected_subject: 0,
            selected_option: 0,
            review_scroll: 0,
            save_error: None,
            bank,
            users,
            results,
            result_log,
            session: None,
            last_result: None,
            review: Vec::new(),
        })
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn session(&self) -> Option<&ExamSession> {
        self.session.as_ref()
    }

    /// Stored results in chronological order.
    pub fn result_log(&self) -> &[ExamResult] {
        &self.result_log
    }

    pub fn last_result(&self) -> Option<&ExamResult> {
        self.last_result.as_ref()
    }

    pub fn review_entries(&self) -> &[ReviewEntry] {
        &self.review
    }

    // --- Login ---

    pub fn login_input_push(&mut self, c: char) {
        self.login.error = None;
        match self.login.field {
            LoginField::Email => self.login.email.push(c),
            LoginField::Password => self.login.password.push(c),
        }
    }

    pub fn login_input_pop(&mut self) {
        match self.login.field {
            LoginField::Email => self.login.email.pop(),
            LoginField::Password => self.login.password.pop(),
        };
    }

    pub fn login_next_field(&mut self) {
        self.login.field = match self.login.field {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    /// Accept the credentials and persist the user record. There is no real
    /// authentication; only the shape of the input is checked.
    pub fn submit_login(&mut self) -> Result<(), PortalError> {
        let email = self.login.email.trim();
        if email.is_empty() || !email.contains('@') {
            self.login.error = Some("Enter a valid email address".to_string());
            return Ok(());
        }
        if self.login.password.is_empty() {
            self.login.error = Some("Enter a password".to_string());
            return Ok(());
        }

        let user = User::from_email(email);
        self.users.save(&user)?;
        tracing::info!(email = %user.email, "user logged in");

        self.result_log = self.results.list_all()?;
        self.user = Some(user);
        self.login = LoginForm::default();
        self.screen = Screen::Dashboard;
        Ok(())
    }

    /// Log out and reset the account: both stored records are cleared.
    pub fn logout(&mut self) -> Result<(), PortalError> {
        self.users.clear()?;
        self.results.clear()?;
        tracing::info!("user logged out, local records cleared");

        self.user = None;
        self.result_log.clear();
        self.session = None;
        self.last_result = None;
        self.review.clear();
        self.screen = Screen::Login;
        Ok(())
    }

    // --- Dashboard ---

    pub fn select_next_subject(&mut self) {
        let count = self.bank.subjects().len();
        if count > 0 {
            self.selected_subject = (self.selected_subject + 1) % count;
        }
    }

    pub fn select_previous_subject(&mut self) {
        let count = self.bank.subjects().len();
        if count > 0 {
            self.selected_subject = (self.selected_subject + count - 1) % count;
        }
    }

    pub fn selected_subject_name(&self) -> Option<String> {
        self.bank
            .subjects()
            .get(self.selected_subject)
            .map(|s| s.to_string())
    }

    /// Sample an exam set for the selected subject and move to the exam
    /// screen. The session waits in `NotStarted` behind the instruction
    /// panel until the user confirms.
    pub fn begin_exam(&mut self) {
        if let Some(subject) = self.selected_subject_name() {
            self.begin_exam_for(subject);
        }
    }

    fn begin_exam_for(&mut self, subject: String) {
        let exam_set = session::sample(self.bank.get_pool(&subject), EXAM_SIZE);
        self.session = Some(ExamSession::new(subject, exam_set));
        self.selected_option = 0;
        self.save_error = None;
        self.screen = Screen::Exam;
    }

    // --- Exam ---

    pub fn start_exam(&mut self) -> Result<(), PortalError> {
        if let Some(session) = &mut self.session {
            if session.questions().is_empty() {
                // The empty-set panel stays up; Esc returns to the dashboard.
                return Ok(());
            }
            session.start()?;
            self.selected_option = 0;
        }
        Ok(())
    }

    /// Abandon an unstarted exam and return to the dashboard.
    pub fn cancel_exam(&mut self) {
        if self
            .session
            .as_ref()
            .is_some_and(|s| s.phase() == Phase::NotStarted)
        {
            self.session = None;
            self.screen = Screen::Dashboard;
        }
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % OPTION_COUNT;
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option = (self.selected_option + OPTION_COUNT - 1) % OPTION_COUNT;
    }

    /// Record the highlighted option for the current question.
    pub fn record_current_answer(&mut self) -> Result<(), PortalError> {
        if let Some(session) = &mut self.session {
            let position = session.current_position();
            session.record_answer(position, self.selected_option)?;
        }
        Ok(())
    }

    /// Jump straight to a question by position, as the number grid on the
    /// original exam page does. Positions past the exam set are ignored
    /// (short exams have fewer than ten questions).
    pub fn go_to_question(&mut self, position: usize) -> Result<(), PortalError> {
        if let Some(session) = &mut self.session {
            if position < session.total_questions() {
                session.go_to(position)?;
            }
        }
        self.sync_selected_option();
        Ok(())
    }

    pub fn next_question(&mut self) -> Result<(), PortalError> {
        if let Some(session) = &mut self.session {
            session.next()?;
        }
        self.sync_selected_option();
        Ok(())
    }

    pub fn previous_question(&mut self) -> Result<(), PortalError> {
        if let Some(session) = &mut self.session {
            session.previous()?;
        }
        self.sync_selected_option();
        Ok(())
    }

    /// Highlight the already-recorded answer when landing on a question.
    fn sync_selected_option(&mut self) {
        if let Some(session) = &self.session {
            self.selected_option = session.answer(session.current_position()).unwrap_or(0);
        }
    }

    pub fn submit_exam(&mut self) -> Result<(), PortalError> {
        if let Some(session) = &mut self.session {
            if let Some(result) = session.submit()? {
                self.finish(result);
            }
        }
        Ok(())
    }

    /// Drive the countdown. Called once per elapsed second by the event
    /// loop; a tick that hits zero finalizes the attempt.
    pub fn on_tick(&mut self) -> Result<(), PortalError> {
        let ticking = self.screen == Screen::Exam
            && self
                .session
                .as_ref()
                .is_some_and(|s| s.phase() == Phase::InProgress);
        if !ticking {
            return Ok(());
        }

        if let Some(session) = &mut self.session {
            if let Some(result) = session.tick()? {
                self.finish(result);
            }
        }
        Ok(())
    }

    /// Persist the finalized result and move to the results screen.
    ///
    /// A failed append is surfaced as a warning on the results screen, not
    /// swallowed; the in-memory result still renders.
    fn finish(&mut self, result: ExamResult) {
        let persisted = match self.results.append(&result) {
            Ok(()) => {
                self.save_error = None;
                self.result_log.push(result.clone());
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to persist exam result");
                self.save_error = Some("Result could not be saved".to_string());
                false
            }
        };

        // Full detail is re-read from the store's most recent entry; after
        // a failed append only the in-memory result describes this attempt.
        let result = if persisted {
            self.results.latest().ok().flatten().unwrap_or(result)
        } else {
            result
        };

        self.review = review::review(&result);
        self.last_result = Some(result);
        self.review_scroll = 0;
        self.session = None;
        self.screen = Screen::Results;
    }

    // --- Results ---

    pub fn scroll_review_down(&mut self) {
        let max_scroll = self.review.len().saturating_sub(1);
        self.review_scroll = (self.review_scroll + 1).min(max_scroll);
    }

    pub fn scroll_review_up(&mut self) {
        self.review_scroll = self.review_scroll.saturating_sub(1);
    }

    /// Start a fresh attempt at the subject just taken.
    pub fn retake_exam(&mut self) {
        if let Some(subject) = self.last_result.as_ref().map(|r| r.subject.clone()) {
            self.begin_exam_for(subject);
        }
    }

    pub fn back_to_dashboard(&mut self) {
        if self.screen == Screen::Results {
            self.screen = Screen::Dashboard;
        }
    }
}
