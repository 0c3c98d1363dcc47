//! Local persistence: a small blob store plus typed stores on top of it.
//!
//! The portal keeps exactly two records — the current user and the result
//! log — each serialized as a JSON blob under its own key. The `Storage`
//! trait keeps the medium swappable (files in production, memory in tests).

mod file;
mod memory;

use crate::error::StorageError;
use crate::models::{ExamResult, User};

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage key for the result log.
pub const RESULTS_KEY: &str = "exam_results";

/// Storage key for the current user record.
pub const USER_KEY: &str = "user";

/// Opaque key-value blob storage.
pub trait Storage {
    /// Read the blob stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous blob.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the blob under `key`; absent keys are not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Append-only log of finalized exam results.
pub struct ResultStore {
    storage: Box<dyn Storage>,
}

impl ResultStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Append a finalized result to the log.
    ///
    /// Failures here mean the attempt was not recorded; the caller must
    /// surface that to the user rather than swallow it.
    pub fn append(&self, result: &ExamResult) -> Result<(), StorageError> {
        let mut results = self.list_all()?;
        results.push(result.clone());
        let blob = serde_json::to_string(&results)?;
        self.storage.save(RESULTS_KEY, &blob)
    }

    /// All stored results in insertion (chronological) order.
    pub fn list_all(&self) -> Result<Vec<ExamResult>, StorageError> {
        match self.storage.load(RESULTS_KEY)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(Vec::new()),
        }
    }

    /// The most recently appended result, if any.
    pub fn latest(&self) -> Result<Option<ExamResult>, StorageError> {
        Ok(self.list_all()?.pop())
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(RESULTS_KEY)
    }
}

/// The single current-user record.
pub struct UserStore {
    storage: Box<dyn Storage>,
}

impl UserStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    pub fn current(&self) -> Result<Option<User>, StorageError> {
        match self.storage.load(USER_KEY)? {
            Some(blob) => Ok(Some(serde_json::from_str(&blob)?)),
            None => Ok(None),
        }
    }

    pub fn save(&self, user: &User) -> Result<(), StorageError> {
        let blob = serde_json::to_string(user)?;
        self.storage.save(USER_KEY, &blob)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(USER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn result(subject: &str, score: usize) -> ExamResult {
        ExamResult {
            subject: subject.to_string(),
            score,
            total_questions: 20,
            date_taken: "2026-08-29".to_string(),
            answers: BTreeMap::new(),
            questions: Vec::new(),
        }
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let storage = MemoryStorage::new();
        let store = ResultStore::new(Box::new(storage));

        store.append(&result("HTML", 12)).unwrap();
        store.append(&result("CSS", 15)).unwrap();
        store.append(&result("HTML", 18)).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].score, 12);
        assert_eq!(all[2].score, 18);
        assert_eq!(store.latest().unwrap().unwrap().score, 18);
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let store = ResultStore::new(Box::new(MemoryStorage::new()));
        assert!(store.list_all().unwrap().is_empty());
        assert!(store.latest().unwrap().is_none());
    }

    #[test]
    fn test_clear_empties_the_log() {
        let store = ResultStore::new(Box::new(MemoryStorage::new()));
        store.append(&result("Java", 9)).unwrap();
        store.clear().unwrap();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_answers_survive_round_trip() {
        let store = ResultStore::new(Box::new(MemoryStorage::new()));
        let mut answers = BTreeMap::new();
        answers.insert(0, 2);
        answers.insert(7, 1);

        let mut r = result("Python", 2);
        r.answers = answers.clone();
        store.append(&r).unwrap();

        let loaded = store.latest().unwrap().unwrap();
        assert_eq!(loaded.answers, answers);
    }

    #[test]
    fn test_user_store_round_trip_and_clear() {
        let store = UserStore::new(Box::new(MemoryStorage::new()));
        assert!(store.current().unwrap().is_none());

        let user = User::from_email("bob@example.com");
        store.save(&user).unwrap();
        assert_eq!(store.current().unwrap(), Some(user));

        store.clear().unwrap();
        assert!(store.current().unwrap().is_none());
    }
}
