//! Durable key-value storage for scores
//!
//! Points and streak survive across games and across process restarts.
//! The engine only needs integer gets and sets; the trait keeps the
//! storage choice out of the game logic so tests run against memory.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use std::io;

/// Key under which total points are stored
pub const POINTS_KEY: &str = "points";

/// Key under which the current win streak is stored
pub const STREAK_KEY: &str = "streak";

/// Minimal integer key-value store
///
/// Missing keys are `None` and treated as zero by callers. Writes must be
/// durable by the time `set_int` returns.
pub trait ScoreStore {
    /// Read an integer value, `None` if the key has never been written
    fn get_int(&self, key: &str) -> Option<i64>;

    /// Write an integer value durably
    ///
    /// # Errors
    /// Returns an I/O error if the value could not be persisted.
    fn set_int(&mut self, key: &str, value: i64) -> io::Result<()>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for &mut S {
    fn get_int(&self, key: &str) -> Option<i64> {
        (**self).get_int(key)
    }

    fn set_int(&mut self, key: &str, value: i64) -> io::Result<()> {
        (**self).set_int(key, value)
    }
}
