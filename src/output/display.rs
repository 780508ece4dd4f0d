//! Display functions for game events

use super::formatters::{keyboard, score_line, tile_row};
use crate::core::Word;
use crate::game::{GameState, GuessOutcome, MAX_GUESSES};
use colored::Colorize;

/// Print the welcome banner and rules
pub fn print_welcome(dictionary_size: usize, degraded: bool) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      W O R D P L A Y                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret 5-letter word in {MAX_GUESSES} tries.");
    println!("  🟩 green  = right letter, right spot");
    println!("  🟨 yellow = right letter, wrong spot");
    println!("  ⬜ gray   = letter not in the word\n");
    println!("Commands: 'hint' (costs points), 'new' for a new game, 'quit' to exit\n");

    if degraded {
        println!(
            "{}",
            "⚠ Word list unavailable - playing with a default word, any guess accepted"
                .yellow()
        );
    } else {
        println!("Playing with a {dictionary_size}-word dictionary");
    }
}

/// Print the result of a guess: tiles, keyboard, and any terminal banner
pub fn print_guess_outcome(guess: &Word, outcome: &GuessOutcome, points: i64, streak: i64) {
    println!("\n  {}\n", tile_row(guess, &outcome.report.feedback));
    println!("{}\n", keyboard(&outcome.report.letters));

    match outcome.report.state {
        GameState::Won => {
            let guesses = outcome.report.guess_count;
            println!(
                "{}",
                format!(
                    "🎉 Solved in {guesses} {}!",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
            if let Some(award) = outcome.points_awarded {
                println!("{}", format!("+{award} points").bright_yellow().bold());
            }
            println!("{}\n", score_line(points, streak));
        }
        GameState::Lost => {
            println!("{}", "❌ Out of guesses!".red().bold());
            if let Some(answer) = &outcome.answer {
                println!("The word was {}", answer.text().bright_white().bold());
            }
            println!("{}\n", score_line(points, streak));
        }
        GameState::InProgress => {
            let remaining = MAX_GUESSES - outcome.report.guess_count;
            println!(
                "{remaining} {} left",
                if remaining == 1 { "guess" } else { "guesses" }
            );
        }
    }
}

/// Print saved totals
pub fn print_stats(points: i64, streak: i64) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("{}", score_line(points, streak));
    println!("{}\n", "─".repeat(40).cyan());
}
