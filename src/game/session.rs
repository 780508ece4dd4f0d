//! Game session state machine
//!
//! One `GameSession` is one game: a secret target, up to `MAX_GUESSES`
//! attempts, the cumulative letter board, and the set of hint-revealed
//! positions. The session validates guesses, runs the evaluator, applies
//! win/loss transitions, and meters hints against the score keeper.

use super::{GameError, ScoreKeeper};
use crate::core::{Feedback, LetterBoard, LetterStatus, WORD_LENGTH, Word};
use crate::store::ScoreStore;
use crate::words::WordBank;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Maximum number of guesses per game
pub const MAX_GUESSES: u32 = 6;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// Result of a successful guess submission
///
/// Carries everything the presentation layer needs to repaint: the
/// ordered tag row, the full letter board for keyboard recoloring, and
/// the session state after the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessReport {
    pub feedback: Feedback,
    pub letters: LetterBoard,
    pub state: GameState,
    pub guess_count: u32,
}

/// A hint purchase: the revealed position and its letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintReveal {
    pub position: usize,
    pub letter: u8,
}

/// A single game against one secret target
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    guess_count: u32,
    letters: LetterBoard,
    revealed: [bool; WORD_LENGTH],
    state: GameState,
}

impl GameSession {
    /// Start a game against the given target
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            guess_count: 0,
            letters: LetterBoard::new(),
            revealed: [false; WORD_LENGTH],
            state: GameState::InProgress,
        }
    }

    /// Submit a raw guess string
    ///
    /// Validation order: game over, length, characters, dictionary
    /// membership (skipped when the bank is degraded). A valid guess is
    /// evaluated, folded into the letter board, and counted; an
    /// all-correct row wins, exhausting the guess budget loses.
    ///
    /// # Errors
    /// - `GameAlreadyOver` if the session is not in progress
    /// - `InvalidLength` / `InvalidCharacters` for malformed input
    /// - `NotInDictionary` if the bank rejects the word
    pub fn submit_guess(&mut self, raw: &str, bank: &WordBank) -> Result<GuessReport, GameError> {
        if self.state != GameState::InProgress {
            return Err(GameError::GameAlreadyOver);
        }

        let guess = Word::new(raw)?;

        if !bank.contains(&guess) {
            return Err(GameError::NotInDictionary(guess.text().to_string()));
        }

        let feedback = Feedback::evaluate(&self.target, &guess);
        self.letters.absorb(&guess, &feedback);
        self.guess_count += 1;

        if feedback.is_winning() {
            self.state = GameState::Won;
        } else if self.guess_count == MAX_GUESSES {
            self.state = GameState::Lost;
        }

        Ok(GuessReport {
            feedback,
            letters: self.letters,
            state: self.state,
            guess_count: self.guess_count,
        })
    }

    /// Buy a hint: reveal one random unrevealed target position
    ///
    /// The cost is deducted through the score keeper before the reveal;
    /// a position is never revealed twice within one game.
    ///
    /// # Errors
    /// - `GameAlreadyOver` if the session is not in progress
    /// - `InsufficientPoints` if the player cannot cover the hint cost
    /// - `NoHintsRemaining` once all five positions are revealed
    pub fn buy_hint<S: ScoreStore, R: Rng + ?Sized>(
        &mut self,
        scores: &mut ScoreKeeper<S>,
        rng: &mut R,
    ) -> Result<HintReveal, GameError> {
        if self.state != GameState::InProgress {
            return Err(GameError::GameAlreadyOver);
        }

        if !scores.can_afford_hint() {
            return Err(GameError::InsufficientPoints {
                needed: scores.table().hint_cost,
                available: scores.points(),
            });
        }

        let unrevealed: Vec<usize> = (0..WORD_LENGTH).filter(|&i| !self.revealed[i]).collect();
        let Some(&position) = unrevealed.choose(rng) else {
            return Err(GameError::NoHintsRemaining);
        };

        if !scores.spend_hint()? {
            // can_afford_hint was checked above; unreachable in single-threaded use
            return Err(GameError::InsufficientPoints {
                needed: scores.table().hint_cost,
                available: scores.points(),
            });
        }

        self.revealed[position] = true;
        self.letters
            .upgrade(self.target.letter_at(position), LetterStatus::Correct);

        Ok(HintReveal {
            position,
            letter: self.target.letter_at(position),
        })
    }

    /// Reset the session for a new game against a fresh target
    ///
    /// Legal from any state; resetting mid-game abandons the current game
    /// without touching points or streak.
    pub fn reset(&mut self, target: Word) {
        *self = Self::new(target);
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Guesses used so far
    #[must_use]
    pub const fn guess_count(&self) -> u32 {
        self.guess_count
    }

    /// Guesses still available
    #[must_use]
    pub const fn guesses_remaining(&self) -> u32 {
        MAX_GUESSES - self.guess_count
    }

    /// Cumulative letter classifications for this game
    #[must_use]
    pub const fn letters(&self) -> &LetterBoard {
        &self.letters
    }

    /// Positions revealed by hints
    pub fn revealed_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WORD_LENGTH).filter(|&i| self.revealed[i])
    }

    /// The secret target
    ///
    /// Presentation uses this to show the answer after a loss.
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::game::RewardTable;
    use crate::store::{MemoryStore, POINTS_KEY};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank() -> WordBank {
        WordBank::parse("crane\nslate\nirate\ngrate\ncrate\nranch\napple\nlevel\nelbow\n").unwrap()
    }

    fn session(target: &str) -> GameSession {
        GameSession::new(Word::new(target).unwrap())
    }

    fn scores_with(points: i64) -> ScoreKeeper<MemoryStore> {
        ScoreKeeper::new(
            MemoryStore::with_values([(POINTS_KEY, points)]),
            RewardTable::default(),
        )
    }

    /// Store whose writes always fail, for error-path tests
    struct BrokenStore {
        points: i64,
    }

    impl ScoreStore for BrokenStore {
        fn get_int(&self, key: &str) -> Option<i64> {
            (key == POINTS_KEY).then_some(self.points)
        }

        fn set_int(&mut self, _key: &str, _value: i64) -> std::io::Result<()> {
            Err(std::io::Error::other("disk full"))
        }
    }

    #[test]
    fn winning_guess_transitions_to_won() {
        let mut game = session("crane");
        let report = game.submit_guess("crane", &bank()).unwrap();

        assert!(report.feedback.is_winning());
        assert_eq!(report.state, GameState::Won);
        assert_eq!(report.guess_count, 1);
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn won_game_rejects_further_guesses() {
        let mut game = session("crane");
        game.submit_guess("crane", &bank()).unwrap();

        assert_eq!(
            game.submit_guess("slate", &bank()),
            Err(GameError::GameAlreadyOver)
        );
        assert_eq!(game.guess_count(), 1);
    }

    #[test]
    fn six_misses_lose_the_game() {
        let mut game = session("crane");
        let b = bank();

        for i in 1..=5 {
            let report = game.submit_guess("slate", &b).unwrap();
            assert_eq!(report.state, GameState::InProgress);
            assert_eq!(report.guess_count, i);
        }

        let report = game.submit_guess("slate", &b).unwrap();
        assert_eq!(report.state, GameState::Lost);
        assert_eq!(game.guesses_remaining(), 0);
        assert_eq!(
            game.submit_guess("crane", &b),
            Err(GameError::GameAlreadyOver)
        );
    }

    #[test]
    fn winning_on_the_last_guess_wins() {
        let mut game = session("crane");
        let b = bank();

        for _ in 0..5 {
            game.submit_guess("slate", &b).unwrap();
        }
        let report = game.submit_guess("crane", &b).unwrap();
        assert_eq!(report.state, GameState::Won);
    }

    #[test]
    fn malformed_guesses_do_not_consume_attempts() {
        let mut game = session("crane");
        let b = bank();

        assert_eq!(
            game.submit_guess("abcd", &b),
            Err(GameError::InvalidLength(4))
        );
        assert_eq!(
            game.submit_guess("abc!!", &b),
            Err(GameError::InvalidCharacters)
        );
        assert_eq!(
            game.submit_guess("zzzzz", &b),
            Err(GameError::NotInDictionary("ZZZZZ".into()))
        );
        assert_eq!(game.guess_count(), 0);
        assert_eq!(game.state(), GameState::InProgress);
    }

    #[test]
    fn degraded_bank_skips_dictionary_check() {
        let mut game = session("apple");
        let degraded = WordBank::fallback();

        // Any well-formed word goes through; malformed input still fails
        assert!(game.submit_guess("zzzzz", &degraded).is_ok());
        assert_eq!(
            game.submit_guess("zzz", &degraded),
            Err(GameError::InvalidLength(3))
        );
    }

    #[test]
    fn letter_board_accumulates_across_guesses() {
        let mut game = session("crane");
        let b = bank();

        game.submit_guess("slate", &b).unwrap();
        assert_eq!(game.letters().status(b'A'), LetterStatus::Correct);
        assert_eq!(game.letters().status(b'S'), LetterStatus::Absent);

        let report = game.submit_guess("ranch", &b).unwrap();
        // A was Correct from SLATE and stays Correct despite RANCH's Present
        assert_eq!(report.letters.status(b'A'), LetterStatus::Correct);
        assert_eq!(report.letters.status(b'R'), LetterStatus::Present);
    }

    #[test]
    fn buy_hint_reveals_and_charges() {
        let mut game = session("crane");
        let mut scores = scores_with(11);
        let mut rng = StdRng::seed_from_u64(1);

        let hint = game.buy_hint(&mut scores, &mut rng).unwrap();
        assert!(hint.position < WORD_LENGTH);
        assert_eq!(hint.letter, game.target().letter_at(hint.position));
        assert_eq!(scores.points(), 6);

        // The revealed letter is now known Correct on the board
        assert_eq!(game.letters().status(hint.letter), LetterStatus::Correct);
    }

    #[test]
    fn buy_hint_requires_points() {
        let mut game = session("crane");
        let mut scores = scores_with(3);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            game.buy_hint(&mut scores, &mut rng),
            Err(GameError::InsufficientPoints {
                needed: 5,
                available: 3
            })
        );
        assert_eq!(scores.points(), 3);
    }

    #[test]
    fn buy_hint_never_repeats_positions_and_exhausts() {
        let mut game = session("crane");
        let mut scores = scores_with(100);
        let mut rng = StdRng::seed_from_u64(9);

        let mut positions = Vec::new();
        for _ in 0..WORD_LENGTH {
            let hint = game.buy_hint(&mut scores, &mut rng).unwrap();
            assert!(!positions.contains(&hint.position));
            positions.push(hint.position);
        }

        assert_eq!(
            game.buy_hint(&mut scores, &mut rng),
            Err(GameError::NoHintsRemaining)
        );
        assert_eq!(scores.points(), 100 - 5 * WORD_LENGTH as i64);
    }

    #[test]
    fn buy_hint_failed_save_charges_nothing_reveals_nothing() {
        let mut game = session("crane");
        let mut scores = ScoreKeeper::new(BrokenStore { points: 11 }, RewardTable::default());
        let mut rng = StdRng::seed_from_u64(1);

        let err = game.buy_hint(&mut scores, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::Storage(_)));

        // The deduction never stuck and no position was revealed
        assert_eq!(scores.points(), 11);
        assert_eq!(game.revealed_positions().count(), 0);
        assert_eq!(game.letters(), &crate::core::LetterBoard::new());
    }

    #[test]
    fn buy_hint_rejected_after_game_over() {
        let mut game = session("crane");
        game.submit_guess("crane", &bank()).unwrap();

        let mut scores = scores_with(50);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            game.buy_hint(&mut scores, &mut rng),
            Err(GameError::GameAlreadyOver)
        );
    }

    #[test]
    fn reset_clears_all_per_game_state() {
        let mut game = session("crane");
        let b = bank();
        let mut scores = scores_with(20);
        let mut rng = StdRng::seed_from_u64(3);

        game.submit_guess("slate", &b).unwrap();
        game.buy_hint(&mut scores, &mut rng).unwrap();

        game.reset(Word::new("apple").unwrap());
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.guess_count(), 0);
        assert_eq!(game.revealed_positions().count(), 0);
        assert_eq!(game.letters().status(b'A'), LetterStatus::Unknown);
        assert_eq!(game.target().text(), "APPLE");
    }

    #[test]
    fn reset_is_legal_mid_game() {
        let mut game = session("crane");
        game.submit_guess("slate", &bank()).unwrap();
        assert_eq!(game.state(), GameState::InProgress);

        game.reset(Word::new("level").unwrap());
        assert_eq!(game.guess_count(), 0);
    }
}
