//! Presentation-facing game façade
//!
//! One `Game` value is the single object a front end talks to. It owns
//! the word bank, the current session, and the score keeper, and wires
//! the termination rules: a win pays out, a loss resets the streak. Until
//! a dictionary has been installed every play operation is rejected with
//! `NotReady`.

use super::{GameError, GameSession, GameState, GuessReport, HintReveal, RewardTable, ScoreKeeper};
use crate::core::Word;
use crate::store::ScoreStore;
use crate::words::WordBank;
use rand::Rng;

/// Outcome of a guess at the façade level
///
/// Extends the session's report with the score events that fired on
/// termination: points awarded on a win, the answer revealed on a loss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub report: GuessReport,
    pub points_awarded: Option<i64>,
    pub answer: Option<Word>,
}

/// The full game: dictionary, current session, persistent scores
#[derive(Debug)]
pub struct Game<S: ScoreStore> {
    bank: Option<WordBank>,
    session: Option<GameSession>,
    scores: ScoreKeeper<S>,
}

impl<S: ScoreStore> Game<S> {
    /// Create a game with no dictionary yet
    ///
    /// Saved totals are loaded immediately; play operations return
    /// `NotReady` until `install_dictionary` runs.
    pub fn new(store: S, table: RewardTable) -> Self {
        Self {
            bank: None,
            session: None,
            scores: ScoreKeeper::new(store, table),
        }
    }

    /// Install the dictionary and start the first game
    ///
    /// An unusable source falls back to the degraded single-word bank, so
    /// this always leaves the game playable.
    pub fn install_dictionary<R: Rng + ?Sized>(&mut self, raw: &str, rng: &mut R) {
        self.install_bank(WordBank::parse_or_fallback(raw), rng);
    }

    /// Install an already-constructed bank and start the first game
    pub fn install_bank<R: Rng + ?Sized>(&mut self, bank: WordBank, rng: &mut R) {
        let target = bank.random_word(rng).clone();
        self.bank = Some(bank);
        self.session = Some(GameSession::new(target));
    }

    /// Whether the dictionary has been installed
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.bank.is_some()
    }

    /// Submit a guess, applying score events on termination
    ///
    /// On a win the reward is recorded and returned in the outcome; on a
    /// loss the streak resets and the answer is included for display.
    ///
    /// # Errors
    /// `NotReady` before a dictionary is installed, otherwise the session
    /// errors plus `Storage` if the score write fails.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GameError> {
        let (Some(bank), Some(session)) = (&self.bank, &mut self.session) else {
            return Err(GameError::NotReady);
        };

        let report = session.submit_guess(raw, bank)?;

        let (points_awarded, answer) = match report.state {
            GameState::Won => (Some(self.scores.record_win(report.guess_count)?), None),
            GameState::Lost => {
                self.scores.record_loss()?;
                (None, Some(session.target().clone()))
            }
            GameState::InProgress => (None, None),
        };

        Ok(GuessOutcome {
            report,
            points_awarded,
            answer,
        })
    }

    /// Buy a hint for the current game
    ///
    /// # Errors
    /// `NotReady` before a dictionary is installed, otherwise the session
    /// hint errors.
    pub fn buy_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<HintReveal, GameError> {
        let Some(session) = &mut self.session else {
            return Err(GameError::NotReady);
        };
        session.buy_hint(&mut self.scores, rng)
    }

    /// Start a new game with a fresh random target
    ///
    /// Legal at any time, including mid-game; abandoning a game never
    /// touches points or streak.
    ///
    /// # Errors
    /// `NotReady` before a dictionary is installed.
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let (Some(bank), Some(session)) = (&self.bank, &mut self.session) else {
            return Err(GameError::NotReady);
        };
        session.reset(bank.random_word(rng).clone());
        Ok(())
    }

    /// The current session, if a dictionary has been installed
    #[must_use]
    pub const fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// The installed bank, if any
    #[must_use]
    pub const fn bank(&self) -> Option<&WordBank> {
        self.bank.as_ref()
    }

    /// Score keeper accessors for display
    #[must_use]
    pub const fn scores(&self) -> &ScoreKeeper<S> {
        &self.scores
    }
}
