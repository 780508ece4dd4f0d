//! Interactive play mode
//!
//! Text-based game loop: read a guess or command, show the evaluated
//! tiles and keyboard, settle scores on win or loss.

use crate::core::Word;
use crate::game::{Game, GameError, GameState, RewardTable};
use crate::output::{print_guess_outcome, print_welcome};
use crate::output::formatters::{hint_line, score_line};
use crate::store::ScoreStore;
use crate::words::WordBank;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the interactive game loop until the player quits
///
/// # Errors
///
/// Returns an error on I/O failures reading input or persisting scores.
pub fn run_play<S: ScoreStore, R: Rng>(
    bank: WordBank,
    store: S,
    table: RewardTable,
    mut rng: R,
) -> Result<(), String> {
    print_welcome(bank.len(), bank.is_degraded());

    let mut game = Game::new(store, table);
    game.install_bank(bank, &mut rng);

    println!("{}\n", score_line(game.scores().points(), game.scores().streak()));

    loop {
        let input = prompt("Guess")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.new_game(&mut rng).map_err(|e| e.to_string())?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            "hint" | "h" => {
                match game.buy_hint(&mut rng) {
                    Ok(hint) => {
                        println!("\n{}", hint_line(hint.position, hint.letter));
                        println!(
                            "{}\n",
                            score_line(game.scores().points(), game.scores().streak())
                        );
                    }
                    Err(e) => println!("\n{}\n", e.to_string().red()),
                }
                continue;
            }
            "" => continue,
            _ => {}
        }

        match game.submit_guess(&input) {
            Ok(outcome) => {
                // The guess was validated by the engine, so this cannot fail
                let guess = Word::new(&input).map_err(|e| e.to_string())?;
                print_guess_outcome(
                    &guess,
                    &outcome,
                    game.scores().points(),
                    game.scores().streak(),
                );

                if outcome.report.state != GameState::InProgress {
                    match prompt("Play again? (yes/no)")?.to_lowercase().as_str() {
                        "yes" | "y" => {
                            game.new_game(&mut rng).map_err(|e| e.to_string())?;
                            println!("\n🔄 New game started!\n");
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
            }
            Err(e @ GameError::Storage(_)) => return Err(e.to_string()),
            Err(e) => println!("\n{}\n", e.to_string().red()),
        }
    }
}

/// Get user input with a prompt
fn prompt(text: &str) -> Result<String, String> {
    print!("{text}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    read_trimmed_line(&mut io::stdin().lock())
}

/// Read one trimmed line; exhausted input reads as the quit command
///
/// A closed stdin (piped input ending) yields zero bytes forever, which
/// must end the loop rather than spin it.
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Result<String, String> {
    let mut input = String::new();
    let bytes = reader.read_line(&mut input).map_err(|e| e.to_string())?;

    if bytes == 0 {
        return Ok("quit".to_string());
    }
    Ok(input.trim().to_string())
}
