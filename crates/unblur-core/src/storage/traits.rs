//! Storage trait definitions

use crate::storage::error::StoreResult;

/// Fixed key the high score lives under
pub const HIGH_SCORE_KEY: &str = "unblur.high_score";

/// Key-value store of opaque integers.
///
/// Designed to work across platforms:
/// - Native: JSON file, database
/// - Browser: localStorage
/// - Testing: In-memory
pub trait HighScoreStore {
    /// Read a value. Returns `None` if the key was never written.
    fn get(&self, key: &str) -> StoreResult<Option<u32>>;

    /// Write a value, replacing any previous one.
    fn put(&mut self, key: &str, value: u32) -> StoreResult<()>;

    /// The persisted high score, or 0 if none was recorded.
    fn high_score(&self) -> StoreResult<u32> {
        Ok(self.get(HIGH_SCORE_KEY)?.unwrap_or(0))
    }
}
