//! Word bank and dictionary loading
//!
//! The default dictionary is embedded in the binary at compile time;
//! a custom newline-delimited list can be loaded from disk instead.

mod bank;
pub mod loader;

pub use bank::{EmptyDictionary, FALLBACK_WORD, WordBank};

/// Default dictionary embedded at compile time
pub(crate) const EMBEDDED_WORDS: &str = include_str!("../../data/words.txt");
