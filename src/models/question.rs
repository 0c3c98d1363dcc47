use serde::{Deserialize, Serialize};

/// Number of options per question.
pub const OPTION_COUNT: usize = 4;

/// A single multiple-choice question.
///
/// Immutable once loaded from the bank. `id` identifies the question within
/// its subject pool; it is distinct from a question's position in an exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: [String; OPTION_COUNT],
    pub correct_answer: usize,
}
