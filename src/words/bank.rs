//! The dictionary of valid guessable words
//!
//! A `WordBank` is built once at startup and shared read-only afterwards.
//! When the real dictionary cannot be parsed the bank falls back to a
//! single default word and runs degraded: membership checks are skipped
//! so any well-formed word is accepted as a guess.

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// The word used when the dictionary fails to load
pub const FALLBACK_WORD: &str = "APPLE";

/// Error returned when a dictionary source yields no usable words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyDictionary;

impl fmt::Display for EmptyDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dictionary contains no valid words")
    }
}

impl std::error::Error for EmptyDictionary {}

/// Immutable set of valid 5-letter words
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<Word>,
    index: FxHashSet<Word>,
    degraded: bool,
}

impl WordBank {
    /// Parse a newline-delimited word source
    ///
    /// Lines are trimmed and uppercased; anything that is not exactly five
    /// A-Z letters is discarded, as are duplicates.
    ///
    /// # Errors
    /// Returns `EmptyDictionary` if no valid words survive filtering.
    ///
    /// # Examples
    /// ```
    /// use wordplay::words::WordBank;
    ///
    /// let bank = WordBank::parse("crane\nslate\nnope!\ntoolong\n").unwrap();
    /// assert_eq!(bank.len(), 2);
    /// assert!(!bank.is_degraded());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, EmptyDictionary> {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();

        for line in raw.lines() {
            if let Ok(word) = Word::new(line)
                && index.insert(word.clone())
            {
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(EmptyDictionary);
        }

        Ok(Self {
            words,
            index,
            degraded: false,
        })
    }

    /// Build the degraded single-word bank
    ///
    /// Used when no dictionary could be loaded. Membership checks pass for
    /// any well-formed word.
    ///
    /// # Panics
    /// Will not panic - the fallback word is a valid constant.
    #[must_use]
    pub fn fallback() -> Self {
        let word = Word::new(FALLBACK_WORD).expect("fallback word is valid");
        let mut index = FxHashSet::default();
        index.insert(word.clone());

        Self {
            words: vec![word],
            index,
            degraded: true,
        }
    }

    /// Parse a source, falling back to the degraded bank if it is unusable
    ///
    /// This is the self-healing load path: an empty or fully-invalid
    /// dictionary never prevents a game from starting.
    #[must_use]
    pub fn parse_or_fallback(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|EmptyDictionary| Self::fallback())
    }

    /// Bank built from the word list embedded in the binary
    ///
    /// # Panics
    /// Will not panic - the embedded list is validated by tests.
    #[must_use]
    pub fn embedded() -> Self {
        Self::parse(super::EMBEDDED_WORDS).expect("embedded word list is non-empty")
    }

    /// Pick a uniformly random target word
    ///
    /// Deterministic under a seeded rng, which is how tests drive it.
    ///
    /// # Panics
    /// Will not panic - a bank always holds at least one word.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.words
            .choose(rng)
            .expect("bank always holds at least one word")
    }

    /// Check whether a word is a legal guess
    ///
    /// In degraded mode every well-formed word is legal.
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.degraded || self.index.contains(word)
    }

    /// Number of words in the bank
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the bank holds no words (never the case after construction)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True when running on the fallback word with validation skipped
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }
}
