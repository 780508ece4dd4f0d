//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterBoard, LetterStatus, Tag, Word};
use colored::Colorize;

/// Format a guess as a colored tile row
///
/// Green on correct, yellow on present, dimmed on absent.
#[must_use]
pub fn tile_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.tags())
        .map(|(&letter, &tag)| {
            let tile = format!(" {} ", letter as char);
            match tag {
                Tag::Correct => tile.black().on_green().bold().to_string(),
                Tag::Present => tile.black().on_yellow().bold().to_string(),
                Tag::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the letter board as a colored QWERTY keyboard
#[must_use]
pub fn keyboard(board: &LetterBoard) -> String {
    const ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

    ROWS.iter()
        .enumerate()
        .map(|(row_index, row)| {
            let keys = row
                .bytes()
                .map(|letter| {
                    let key = (letter as char).to_string();
                    match board.status(letter) {
                        LetterStatus::Correct => key.black().on_green().bold().to_string(),
                        LetterStatus::Present => key.black().on_yellow().bold().to_string(),
                        LetterStatus::Absent => key.bright_black().to_string(),
                        LetterStatus::Unknown => key.white().to_string(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            format!("{}{keys}", " ".repeat(row_index))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the points and streak banner
#[must_use]
pub fn score_line(points: i64, streak: i64) -> String {
    format!(
        "Points: {}   Streak: {}",
        points.to_string().bright_yellow().bold(),
        streak.to_string().bright_cyan().bold()
    )
}

/// Format a revealed hint for display
#[must_use]
pub fn hint_line(position: usize, letter: u8) -> String {
    format!(
        "Hint: position {} is {}",
        (position + 1).to_string().bright_white().bold(),
        ((letter as char).to_string()).black().on_green().bold()
    )
}
