//! Cumulative per-letter knowledge across a game
//!
//! The board remembers the best-known status of every letter A-Z over all
//! guesses in one game. Statuses only ever move up in information rank
//! (`Unknown < Absent < Present < Correct`); a letter that has been seen
//! green never falls back to yellow or gray. Reset only on a new game.

use super::{Feedback, Tag, Word};

const ALPHABET: usize = 26;

/// Best-known classification of a single letter
///
/// Ordered by information rank, lowest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

impl From<Tag> for LetterStatus {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Correct => Self::Correct,
            Tag::Present => Self::Present,
            Tag::Absent => Self::Absent,
        }
    }
}

/// Classification map for all 26 letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterBoard([LetterStatus; ALPHABET]);

impl LetterBoard {
    /// Create a board with every letter `Unknown`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current status of a letter (A-Z, case-insensitive)
    ///
    /// Non-letter bytes report `Unknown`.
    #[must_use]
    pub fn status(&self, letter: u8) -> LetterStatus {
        match Self::index(letter) {
            Some(i) => self.0[i],
            None => LetterStatus::Unknown,
        }
    }

    /// Upgrade a letter's status, never downgrading
    ///
    /// # Examples
    /// ```
    /// use wordplay::core::{LetterBoard, LetterStatus};
    ///
    /// let mut board = LetterBoard::new();
    /// board.upgrade(b'E', LetterStatus::Correct);
    /// board.upgrade(b'E', LetterStatus::Absent);
    ///
    /// // Correct outranks Absent, so the later report is ignored
    /// assert_eq!(board.status(b'E'), LetterStatus::Correct);
    /// ```
    pub fn upgrade(&mut self, letter: u8, status: LetterStatus) {
        if let Some(i) = Self::index(letter) {
            self.0[i] = self.0[i].max(status);
        }
    }

    /// Fold an evaluated guess into the board
    ///
    /// Each position upgrades its letter with the tag's status. Duplicate
    /// letters in the guess settle to the highest tag among them.
    pub fn absorb(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &tag) in guess.letters().iter().zip(feedback.tags()) {
            self.upgrade(letter, tag.into());
        }
    }

    /// Iterate over (letter, status) pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &status)| (b'A' + i as u8, status))
    }

    fn index(letter: u8) -> Option<usize> {
        let upper = letter.to_ascii_uppercase();
        upper.is_ascii_uppercase().then(|| usize::from(upper - b'A'))
    }
}
