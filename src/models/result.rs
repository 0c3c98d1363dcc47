use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Question;

/// Answers keyed by question position within the exam set.
///
/// A missing key means the position was never answered.
pub type AnswerMap = BTreeMap<usize, usize>;

/// A finalized exam attempt, appended to the result log once per completed
/// session and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamResult {
    pub subject: String,
    pub score: usize,
    pub total_questions: usize,
    pub date_taken: String,
    pub answers: AnswerMap,
    pub questions: Vec<Question>,
}

impl ExamResult {
    /// Score as a percentage of this result's own question count.
    pub fn percentage(&self) -> f64 {
        if self.total_questions > 0 {
            (self.score as f64 / self.total_questions as f64) * 100.0
        } else {
            0.0
        }
    }
}
