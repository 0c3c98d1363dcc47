//! Dashboard aggregation over the stored result log. Read-only.

use crate::models::ExamResult;

/// Summary statistics for one subject.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectStats {
    pub attempts: usize,
    pub average_score: f64,
    pub best_score: usize,
}

/// Summary statistics across all subjects, percentage-normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct OverallStats {
    pub total_exams: usize,
    pub average_percent: f64,
    pub best_percent: f64,
}

/// Per-subject stats, or `None` when no result matches the subject.
pub fn stats_for(subject: &str, results: &[ExamResult]) -> Option<SubjectStats> {
    let matching: Vec<&ExamResult> = results.iter().filter(|r| r.subject == subject).collect();
    if matching.is_empty() {
        return None;
    }

    let attempts = matching.len();
    let total: usize = matching.iter().map(|r| r.score).sum();
    let best_score = matching.iter().map(|r| r.score).max().unwrap_or(0);

    Some(SubjectStats {
        attempts,
        average_score: total as f64 / attempts as f64,
        best_score,
    })
}

/// Overall stats across every stored result, or `None` when the log is
/// empty. Percentages are normalized by each result's own question count,
/// so short exams from thin pools weigh correctly.
pub fn overall(results: &[ExamResult]) -> Option<OverallStats> {
    if results.is_empty() {
        return None;
    }

    let percent_sum: f64 = results.iter().map(ExamResult::percentage).sum();
    let best_percent = results
        .iter()
        .map(ExamResult::percentage)
        .fold(0.0, f64::max);

    Some(OverallStats {
        total_exams: results.len(),
        average_percent: percent_sum / results.len() as f64,
        best_percent,
    })
}
