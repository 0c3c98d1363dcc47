//! Per-question breakdown of a stored result. Pure; no side effects.

use crate::models::{ExamResult, Question};

/// One reviewed position of a finished exam.
#[derive(Debug, Clone)]
pub struct ReviewEntry {
    pub question: Question,
    pub chosen: Option<usize>,
    pub is_correct: bool,
}

/// Grade band derived from a percentage score.
pub fn grade(percentage: f64) -> &'static str {
    match percentage {
        p if p >= 90.0 => "A+",
        p if p >= 80.0 => "A",
        p if p >= 70.0 => "B",
        p if p >= 60.0 => "C",
        p if p >= 50.0 => "D",
        _ => "F",
    }
}

/// Break a stored result down position by position. Unanswered positions
/// come back with `chosen = None` and count as incorrect.
pub fn review(result: &ExamResult) -> Vec<ReviewEntry> {
    result
        .questions
        .iter()
        .enumerate()
        .map(|(position, question)| {
            let chosen = result.answers.get(&position).copied();
            ReviewEntry {
                question: question.clone(),
                chosen,
                is_correct: chosen == Some(question.correct_answer),
            }
        })
        .collect()
}
