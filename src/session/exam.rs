//! The exam attempt state machine.
//!
//! One `ExamSession` exists per attempt. All mutation goes through phase-
//! checked operations; finalization is a check-and-set on `phase`, so a
//! timeout tick and a manual submit can never both produce a result.

use chrono::Local;

use crate::error::SessionError;
use crate::models::{AnswerMap, ExamResult, Question};

/// Questions per exam (pools smaller than this yield shorter exams).
pub const EXAM_SIZE: usize = 20;

/// Time limit per attempt, in seconds.
pub const EXAM_SECONDS: u32 = 30 * 60;

/// Lifecycle stage of an attempt. `Submitted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Submitted,
}

/// A single exam attempt over a sampled exam set.
pub struct ExamSession {
    subject: String,
    questions: Vec<Question>,
    answers: AnswerMap,
    current_position: usize,
    seconds_remaining: u32,
    phase: Phase,
}

impl ExamSession {
    /// Create a session over an already-sampled exam set. The session stays
    /// in `NotStarted` until `start()` is called.
    pub fn new(subject: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            subject: subject.into(),
            questions,
            answers: AnswerMap::new(),
            current_position: 0,
            seconds_remaining: EXAM_SECONDS,
            phase: Phase::NotStarted,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_position(&self) -> usize {
        self.current_position
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_position]
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// The recorded answer for a position, if any.
    pub fn answer(&self, position: usize) -> Option<usize> {
        self.answers.get(&position).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Begin the attempt. Fails with `EmptyPool` when the exam set is empty
    /// (unknown subject or exhausted bank); the caller presents the
    /// "no questions available" state instead of starting.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.require_phase(Phase::NotStarted, "start")?;
        if self.questions.is_empty() {
            return Err(SessionError::EmptyPool);
        }

        self.phase = Phase::InProgress;
        self.seconds_remaining = EXAM_SECONDS;
        self.current_position = 0;
        self.answers.clear();
        tracing::info!(
            subject = %self.subject,
            questions = self.questions.len(),
            "exam started"
        );
        Ok(())
    }

    /// Record (or overwrite) the answer for a position. Does not move the
    /// current position.
    pub fn record_answer(&mut self, position: usize, option: usize) -> Result<(), SessionError> {
        self.require_phase(Phase::InProgress, "record an answer")?;
        self.check_position(position)?;

        let option_count = self.questions[position].options.len();
        if option >= option_count {
            return Err(SessionError::OutOfRange {
                index: option,
                limit: option_count,
            });
        }

        self.answers.insert(position, option);
        Ok(())
    }

    /// Jump to a specific position.
    pub fn go_to(&mut self, position: usize) -> Result<(), SessionError> {
        self.require_phase(Phase::InProgress, "navigate")?;
        self.check_position(position)?;
        self.current_position = position;
        Ok(())
    }

    /// Advance one position; no-op at the last question.
    pub fn next(&mut self) -> Result<(), SessionError> {
        self.require_phase(Phase::InProgress, "navigate")?;
        if self.current_position + 1 < self.questions.len() {
            self.current_position += 1;
        }
        Ok(())
    }

    /// Step back one position; no-op at the first question.
    pub fn previous(&mut self) -> Result<(), SessionError> {
        self.require_phase(Phase::InProgress, "navigate")?;
        self.current_position = self.current_position.saturating_sub(1);
        Ok(())
    }

    /// Count down one second. Reaching zero auto-submits and returns the
    /// finalized result. Ticks arriving after submission are no-ops, so a
    /// timer racing a manual submit cannot finalize twice.
    pub fn tick(&mut self) -> Result<Option<ExamResult>, SessionError> {
        match self.phase {
            Phase::NotStarted => Err(SessionError::InvalidTransition {
                operation: "tick",
                phase: self.phase,
            }),
            Phase::Submitted => Ok(None),
            Phase::InProgress => {
                self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
                if self.seconds_remaining == 0 {
                    tracing::info!(subject = %self.subject, "time expired, auto-submitting");
                    Ok(Some(self.finalize()))
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Finalize the attempt and return the scored result.
    ///
    /// Only the first caller to observe `InProgress` wins the transition; a
    /// repeat call returns `Ok(None)`. Persisting the result is the caller's
    /// responsibility.
    pub fn submit(&mut self) -> Result<Option<ExamResult>, SessionError> {
        match self.phase {
            Phase::NotStarted => Err(SessionError::InvalidTransition {
                operation: "submit",
                phase: self.phase,
            }),
            Phase::Submitted => Ok(None),
            Phase::InProgress => Ok(Some(self.finalize())),
        }
    }

    fn finalize(&mut self) -> ExamResult {
        self.phase = Phase::Submitted;

        let score = self
            .answers
            .iter()
            .filter(|(pos, answer)| {
                self.questions
                    .get(**pos)
                    .is_some_and(|q| q.correct_answer == **answer)
            })
            .count();

        tracing::info!(
            subject = %self.subject,
            score,
            total = self.questions.len(),
            "exam submitted"
        );

        ExamResult {
            subject: self.subject.clone(),
            score,
            total_questions: self.questions.len(),
            date_taken: Local::now().format("%Y-%m-%d").to_string(),
            answers: self.answers.clone(),
            questions: self.questions.clone(),
        }
    }

    fn require_phase(&self, expected: Phase, operation: &'static str) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                operation,
                phase: self.phase,
            })
        }
    }

    fn check_position(&self, position: usize) -> Result<(), SessionError> {
        if position < self.questions.len() {
            Ok(())
        } else {
            Err(SessionError::OutOfRange {
                index: position,
                limit: self.questions.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(count: u32) -> Vec<Question> {
        (0..count)
            .map(|id| Question {
                id,
                text: format!("Question {}", id),
                options: [
                    "a".to_string(),
                    "b".to_string(),
                    "c".to_string(),
                    "d".to_string(),
                ],
                // Correct option cycles through 0..4.
                correct_answer: (id % 4) as usize,
            })
            .collect()
    }

    fn started(count: u32) -> ExamSession {
        let mut session = ExamSession::new("HTML", questions(count));
        session.start().unwrap();
        session
    }

    #[test]
    fn test_start_on_empty_set_fails_with_empty_pool() {
        let mut session = ExamSession::new("RUST", Vec::new());
        assert_eq!(session.start(), Err(SessionError::EmptyPool));
        assert_eq!(session.phase(), Phase::NotStarted);
    }

    #[test]
    fn test_operations_outside_in_progress_fail() {
        let mut session = ExamSession::new("HTML", questions(5));
        assert!(matches!(
            session.record_answer(0, 0),
            Err(SessionError::InvalidTransition { .. })
        ));
        assert!(matches!(
            session.tick(),
            Err(SessionError::InvalidTransition { .. })
        ));
        assert!(matches!(
            session.submit(),
            Err(SessionError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_record_answer_overwrites_without_advancing() {
        let mut session = started(5);
        session.record_answer(2, 1).unwrap();
        session.record_answer(2, 3).unwrap();

        assert_eq!(session.answer(2), Some(3));
        assert_eq!(session.current_position(), 0);
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn test_record_answer_rejects_out_of_range() {
        let mut session = started(5);
        assert!(matches!(
            session.record_answer(5, 0),
            Err(SessionError::OutOfRange { index: 5, .. })
        ));
        assert!(matches!(
            session.record_answer(0, 4),
            Err(SessionError::OutOfRange { index: 4, .. })
        ));
    }

    #[test]
    fn test_navigation_clamps_at_edges() {
        let mut session = started(3);
        session.previous().unwrap();
        assert_eq!(session.current_position(), 0);

        session.go_to(2).unwrap();
        session.next().unwrap();
        assert_eq!(session.current_position(), 2);

        assert!(matches!(
            session.go_to(3),
            Err(SessionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_score_counts_matching_positions() {
        let mut session = started(4);
        // Questions 0..4 have correct answers 0, 1, 2, 3.
        session.record_answer(0, 0).unwrap();
        session.record_answer(1, 1).unwrap();
        session.record_answer(2, 0).unwrap(); // wrong
        // Position 3 left unanswered.

        let result = session.submit().unwrap().unwrap();
        assert_eq!(result.score, 2);
        assert_eq!(result.total_questions, 4);
        assert!(result.score <= result.total_questions);
        assert_eq!(result.answers.get(&3), None);
    }

    #[test]
    fn test_all_correct_scores_full_marks() {
        let mut session = started(20);
        for pos in 0..20 {
            let correct = session.questions()[pos].correct_answer;
            session.record_answer(pos, correct).unwrap();
        }

        let result = session.submit().unwrap().unwrap();
        assert_eq!(result.score, 20);
        assert_eq!(result.total_questions, 20);
    }

    #[test]
    fn test_submit_is_idempotent() {
        let mut session = started(2);
        assert!(session.submit().unwrap().is_some());
        assert!(session.submit().unwrap().is_none());
        assert_eq!(session.phase(), Phase::Submitted);
    }

    #[test]
    fn test_timeout_auto_submits_exactly_once() {
        let mut session = started(3);

        let mut results = 0;
        for _ in 0..EXAM_SECONDS {
            if session.tick().unwrap().is_some() {
                results += 1;
            }
        }

        assert_eq!(results, 1);
        assert_eq!(session.phase(), Phase::Submitted);
        assert_eq!(session.seconds_remaining(), 0);

        // Late ticks and submits are no-ops.
        assert!(session.tick().unwrap().is_none());
        assert!(session.submit().unwrap().is_none());
    }

    #[test]
    fn test_timeout_with_no_answers_scores_zero() {
        let mut session = started(3);
        let mut finalized = None;
        for _ in 0..EXAM_SECONDS {
            if let Some(result) = session.tick().unwrap() {
                finalized = Some(result);
            }
        }

        let result = finalized.unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.total_questions, 3);
    }

    #[test]
    fn test_clock_is_monotonically_non_increasing() {
        let mut session = started(2);
        let mut previous = session.seconds_remaining();
        // Run past expiry so the floored-at-zero tail is covered too.
        for _ in 0..EXAM_SECONDS + 5 {
            session.tick().unwrap();
            let now = session.seconds_remaining();
            assert!(now <= previous);
            previous = now;
        }
        assert_eq!(session.seconds_remaining(), 0);
    }

    #[test]
    fn test_no_mutation_after_submission() {
        let mut session = started(2);
        session.submit().unwrap();

        assert!(matches!(
            session.record_answer(0, 0),
            Err(SessionError::InvalidTransition { .. })
        ));
        assert!(matches!(
            session.next(),
            Err(SessionError::InvalidTransition { .. })
        ));
    }
}
