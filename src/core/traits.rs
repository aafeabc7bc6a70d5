//! Core traits for score persistence
//!
//! The persisted counters live behind a small key-value abstraction so the
//! presentation layer can inject a file-backed store while tests use an
//! in-memory one.

use crate::types::HstError;

/// Key-value store for named integer counters
///
/// A key that was never written reads as zero.
pub trait ScoreStore {
    /// Read a counter
    fn get(&self, key: &str) -> Result<u64, HstError>;

    /// Write a counter, persisting it before returning
    fn set(&mut self, key: &str, value: u64) -> Result<(), HstError>;

    /// Write several counters as one update
    ///
    /// Stores that persist to disk override this so either every value or
    /// none of them is saved.
    fn set_all(&mut self, values: &[(&str, u64)]) -> Result<(), HstError> {
        for (key, value) in values {
            self.set(key, *value)?;
        }
        Ok(())
    }
}
