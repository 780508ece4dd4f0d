//! Core domain types for the game engine
//!
//! Pure types with no I/O: words, guess feedback, and the cumulative
//! letter classification board. Everything here is a deterministic
//! function of its inputs.

mod feedback;
mod letters;
mod word;

pub use feedback::{Feedback, Tag};
pub use letters::{LetterBoard, LetterStatus};
pub use word::{WORD_LENGTH, Word, WordError};
