//! Error taxonomy for the portal.

use std::io;

use thiserror::Error;

use crate::session::Phase;

/// Errors raised by the exam session state machine.
///
/// `InvalidTransition` and `OutOfRange` indicate caller bugs (an operation
/// invoked outside its valid phase, or an index past the exam set); they are
/// surfaced rather than silently ignored so the UI layer can assert on them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// An operation was invoked in a phase where it is not valid.
    #[error("cannot {operation} while session is {phase:?}")]
    InvalidTransition {
        operation: &'static str,
        phase: Phase,
    },

    /// A question position or option index was out of bounds.
    #[error("index {index} out of range (limit {limit})")]
    OutOfRange { index: usize, limit: usize },

    /// The exam set is empty; the session cannot start.
    #[error("no questions available for this exam")]
    EmptyPool,
}

/// Errors raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to (de)serialize stored record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while loading the question bank.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("question bank contains no subjects")]
    NoSubjects,

    #[error("question {id} in subject {subject} has an out-of-range correct answer")]
    InvalidQuestion { subject: String, id: u32 },
}

/// Top-level error type for portal operations.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error(transparent)]
    Bank(#[from] BankError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
