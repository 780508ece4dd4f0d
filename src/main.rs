//! Wordplay - CLI
//!
//! Terminal front end for the word-guessing game engine.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordplay::{
    commands::{run_play, run_stats},
    game::RewardTable,
    store::JsonFileStore,
    words::{WordBank, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordplay",
    about = "Wordle-style word-guessing game with scoring, streaks, and hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a custom newline-delimited word list (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Save file for points and streak
    #[arg(short = 's', long, global = true, default_value = "wordplay_save.json")]
    save: String,

    /// Scoring variant: tiered (6/3 by speed) or flat (10 per win)
    #[arg(long, global = true, default_value = "tiered")]
    scoring: String,

    /// Seed for the random number generator (default: from OS entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play,

    /// Show saved points and streak
    Stats,
}

/// Pick the reward table from the --scoring flag
fn reward_table(name: &str) -> RewardTable {
    match name {
        "flat" => RewardTable::flat(10),
        _ => RewardTable::default(),
    }
}

/// Load the word bank from the -w flag, or the embedded list
fn load_bank(wordlist: Option<&str>) -> Result<WordBank> {
    match wordlist {
        Some(path) => Ok(load_from_file(path)?),
        None => Ok(WordBank::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let bank = load_bank(cli.wordlist.as_deref())?;
            let store = JsonFileStore::open(&cli.save)?;
            let table = reward_table(&cli.scoring);
            let rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            run_play(bank, store, table, rng).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Stats => {
            let store = JsonFileStore::open(&cli.save)?;
            run_stats(store);
            Ok(())
        }
    }
}
