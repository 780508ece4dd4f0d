//! In-memory score store
//!
//! Not durable; used by tests and by play sessions that opt out of a
//! save file.

use super::ScoreStore;
use rustc_hash::FxHashMap;
use std::io;

/// Volatile key-value store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, i64>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with values, for tests
    #[must_use]
    pub fn with_values(values: impl IntoIterator<Item = (&'static str, i64)>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }
}

impl ScoreStore for MemoryStore {
    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn set_int(&mut self, key: &str, value: i64) -> io::Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
