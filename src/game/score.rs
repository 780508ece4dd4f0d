//! Points, streaks, and the hint economy
//!
//! `ScoreKeeper` is the single owner of the persisted totals: points and
//! the current win streak. Every mutation is written through to the store
//! before it returns, so the numbers on screen always match the numbers
//! on disk. Points never go negative; spending is a hard precondition.

use super::GameError;
use crate::store::{POINTS_KEY, STREAK_KEY, ScoreStore};

/// Scoring configuration
///
/// The reference reward table is tiered: a quick win (at most
/// `quick_threshold` guesses) earns `quick_win` points, any other win
/// earns `standard_win`. The flat variant pays one rate regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardTable {
    pub quick_win: i64,
    pub standard_win: i64,
    pub quick_threshold: u32,
    pub hint_cost: i64,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            quick_win: 6,
            standard_win: 3,
            quick_threshold: 2,
            hint_cost: 5,
        }
    }
}

impl RewardTable {
    /// Flat-rate variant: every win pays the same
    #[must_use]
    pub const fn flat(points: i64) -> Self {
        Self {
            quick_win: points,
            standard_win: points,
            quick_threshold: 2,
            hint_cost: 5,
        }
    }

    /// Points awarded for a win taking `guesses_used` guesses
    #[must_use]
    pub const fn award_for(&self, guesses_used: u32) -> i64 {
        if guesses_used <= self.quick_threshold {
            self.quick_win
        } else {
            self.standard_win
        }
    }
}

/// Persistent score and streak tracker
#[derive(Debug)]
pub struct ScoreKeeper<S: ScoreStore> {
    store: S,
    table: RewardTable,
    points: i64,
    streak: i64,
}

impl<S: ScoreStore> ScoreKeeper<S> {
    /// Load totals from the store
    ///
    /// Missing keys read as 0; stored negatives (from older saves) are
    /// clamped to 0.
    pub fn new(store: S, table: RewardTable) -> Self {
        let points = store.get_int(POINTS_KEY).unwrap_or(0).max(0);
        let streak = store.get_int(STREAK_KEY).unwrap_or(0).max(0);

        Self {
            store,
            table,
            points,
            streak,
        }
    }

    /// Current point total
    #[must_use]
    pub const fn points(&self) -> i64 {
        self.points
    }

    /// Current win streak
    #[must_use]
    pub const fn streak(&self) -> i64 {
        self.streak
    }

    /// The active reward table
    #[must_use]
    pub const fn table(&self) -> &RewardTable {
        &self.table
    }

    /// Whether a hint can currently be afforded
    #[must_use]
    pub const fn can_afford_hint(&self) -> bool {
        self.points >= self.table.hint_cost
    }

    /// Record a win, returning the points awarded
    ///
    /// Adds the table's award for `guesses_used` and extends the streak.
    ///
    /// # Errors
    /// Returns `GameError::Storage` if the new totals cannot be persisted;
    /// the in-memory totals are left unchanged.
    pub fn record_win(&mut self, guesses_used: u32) -> Result<i64, GameError> {
        let award = self.table.award_for(guesses_used);
        self.persist(self.points + award, self.streak + 1)?;
        Ok(award)
    }

    /// Record a loss: the streak resets, points are untouched
    ///
    /// # Errors
    /// Returns `GameError::Storage` if the reset streak cannot be
    /// persisted; the in-memory streak is left unchanged.
    pub fn record_loss(&mut self) -> Result<(), GameError> {
        self.persist(self.points, 0)
    }

    /// Deduct the hint cost if affordable
    ///
    /// Returns `true` and persists when the hint was paid for; `false`
    /// with no mutation otherwise.
    ///
    /// # Errors
    /// Returns `GameError::Storage` if the deduction cannot be persisted;
    /// the in-memory points are left unchanged, so a failed save never
    /// charges for a hint.
    pub fn spend_hint(&mut self) -> Result<bool, GameError> {
        if !self.can_afford_hint() {
            return Ok(false);
        }
        self.persist(self.points - self.table.hint_cost, self.streak)?;
        Ok(true)
    }

    // Write the new totals to the store first; commit to memory only once
    // both keys are durable, so the keeper never diverges from disk on a
    // failed write.
    fn persist(&mut self, points: i64, streak: i64) -> Result<(), GameError> {
        self.store
            .set_int(POINTS_KEY, points)
            .and_then(|()| self.store.set_int(STREAK_KEY, streak))
            .map_err(|e| GameError::Storage(e.to_string()))?;

        self.points = points;
        self.streak = streak;
        Ok(())
    }
}
