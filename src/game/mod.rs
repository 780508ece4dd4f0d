//! Game engine: session state machine, scoring, and the front-end façade

mod error;
mod facade;
mod score;
mod session;

pub use error::GameError;
pub use facade::{Game, GuessOutcome};
pub use score::{RewardTable, ScoreKeeper};
pub use session::{GameSession, GameState, GuessReport, HintReveal, MAX_GUESSES};
