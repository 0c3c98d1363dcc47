//! Static question bank: subject key -> pool of questions.
//!
//! The bank is loaded once from a JSON file mapping subject names to
//! question arrays and never mutated afterwards. Unknown subjects yield an
//! empty pool; the caller is responsible for the "no questions" state.

mod catalog;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::BankError;
use crate::models::{Question, OPTION_COUNT};

pub use catalog::SubjectInfo;

/// Read-only catalog of question pools, keyed by subject.
pub struct QuestionBank {
    subjects: HashMap<String, Vec<Question>>,
}

impl QuestionBank {
    pub fn new(subjects: HashMap<String, Vec<Question>>) -> Result<Self, BankError> {
        if subjects.is_empty() {
            return Err(BankError::NoSubjects);
        }
        // Everything downstream indexes options by correct_answer; reject
        // out-of-range records here instead of panicking at review time.
        for (subject, pool) in &subjects {
            for question in pool {
                if question.correct_answer >= OPTION_COUNT {
                    return Err(BankError::InvalidQuestion {
                        subject: subject.clone(),
                        id: question.id,
                    });
                }
            }
        }
        Ok(Self { subjects })
    }

    /// Load the bank from a JSON file.
    ///
    /// Schema: `{ "HTML": [ { "id": 1, "text": ..., "options": [...],
    /// "correct_answer": 0 }, ... ], ... }`.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, BankError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let subjects: HashMap<String, Vec<Question>> = serde_json::from_str(&content)?;
        tracing::info!(
            subjects = subjects.len(),
            path = %path.display(),
            "question bank loaded"
        );
        Self::new(subjects)
    }

    /// The full pool for a subject; empty for unknown subjects.
    pub fn get_pool(&self, subject: &str) -> &[Question] {
        self.subjects
            .get(subject)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Subject keys in display order (alphabetical).
    pub fn subjects(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.subjects.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32) -> Question {
        Question {
            id,
            text: format!("Question {}", id),
            options: [
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            correct_answer: 0,
        }
    }

    #[test]
    fn test_unknown_subject_yields_empty_pool() {
        let mut subjects = HashMap::new();
        subjects.insert("HTML".to_string(), vec![question(1)]);
        let bank = QuestionBank::new(subjects).unwrap();

        assert_eq!(bank.get_pool("HTML").len(), 1);
        assert!(bank.get_pool("RUST").is_empty());
    }

    #[test]
    fn test_empty_bank_rejected() {
        assert!(matches!(
            QuestionBank::new(HashMap::new()),
            Err(BankError::NoSubjects)
        ));
    }

    #[test]
    fn test_out_of_range_correct_answer_rejected() {
        let mut bad = question(3);
        bad.correct_answer = 9;
        let mut subjects = HashMap::new();
        subjects.insert("HTML".to_string(), vec![question(1), bad]);

        assert!(matches!(
            QuestionBank::new(subjects),
            Err(BankError::InvalidQuestion { id: 3, .. })
        ));
    }

    #[test]
    fn test_loader_rejects_out_of_range_correct_answer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(
            &path,
            r#"{"HTML":[{"id":1,"text":"q","options":["a","b","c","d"],"correct_answer":9}]}"#,
        )
        .unwrap();

        assert!(matches!(
            QuestionBank::from_json(&path),
            Err(BankError::InvalidQuestion { id: 1, .. })
        ));
    }

    #[test]
    fn test_subjects_sorted() {
        let mut subjects = HashMap::new();
        subjects.insert("Python".to_string(), vec![]);
        subjects.insert("CSS".to_string(), vec![]);
        subjects.insert("HTML".to_string(), vec![]);
        let bank = QuestionBank::new(subjects).unwrap();

        assert_eq!(bank.subjects(), vec!["CSS", "HTML", "Python"]);
    }
}
