//! In-memory storage backend
//!
//! A simple HashMap-based implementation for testing and development.
//! Not suitable for production use due to lack of persistence.

use std::collections::HashMap;

use crate::storage::error::StoreResult;
use crate::storage::traits::HighScoreStore;

/// In-memory score store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, u32>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Create a memory store with an initial high score.
    pub fn with_high_score(score: u32) -> Self {
        let mut store = Self::new();
        store
            .values
            .insert(crate::storage::HIGH_SCORE_KEY.to_string(), score);
        store
    }
}

impl HighScoreStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<u32>> {
        Ok(self.values.get(key).copied())
    }

    fn put(&mut self, key: &str, value: u32) -> StoreResult<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::HIGH_SCORE_KEY;

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nope").unwrap(), None);
        assert_eq!(store.high_score().unwrap(), 0);
    }

    #[test]
    fn test_put_overwrites() {
        let mut store = MemoryStore::with_high_score(40);
        assert_eq!(store.high_score().unwrap(), 40);
        store.put(HIGH_SCORE_KEY, 70).unwrap();
        assert_eq!(store.high_score().unwrap(), 70);
    }
}
