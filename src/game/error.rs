//! User-facing game errors
//!
//! Every variant is a recoverable condition the presentation layer shows
//! to the player; none is fatal to the process.

use crate::core::{WORD_LENGTH, WordError};
use std::fmt;

/// Error type for game operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Guess is not exactly 5 characters
    InvalidLength(usize),
    /// Guess contains characters outside A-Z
    InvalidCharacters,
    /// Guess is well-formed but not in the dictionary
    NotInDictionary(String),
    /// The current game has already been won or lost
    GameAlreadyOver,
    /// Not enough points to buy a hint
    InsufficientPoints { needed: i64, available: i64 },
    /// Every position has already been revealed
    NoHintsRemaining,
    /// A dictionary source produced no usable words
    EmptyDictionary,
    /// The dictionary has not been installed yet
    NotReady,
    /// A score mutation could not be persisted
    Storage(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Guesses must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Guesses may only use letters A-Z"),
            Self::NotInDictionary(word) => write!(f, "{word} is not in the word list"),
            Self::GameAlreadyOver => write!(f, "The game is over; start a new game to keep playing"),
            Self::InsufficientPoints { needed, available } => {
                write!(f, "A hint costs {needed} points, you have {available}")
            }
            Self::NoHintsRemaining => write!(f, "Every position has already been revealed"),
            Self::EmptyDictionary => write!(f, "Dictionary contains no valid words"),
            Self::NotReady => write!(f, "The word list is still loading"),
            Self::Storage(msg) => write!(f, "Could not save your score: {msg}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<WordError> for GameError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(len) => Self::InvalidLength(len),
            WordError::InvalidCharacters => Self::InvalidCharacters,
        }
    }
}

impl From<crate::words::EmptyDictionary> for GameError {
    fn from(_: crate::words::EmptyDictionary) -> Self {
        Self::EmptyDictionary
    }
}
