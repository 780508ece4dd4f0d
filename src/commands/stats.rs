//! Saved-score display

use crate::game::{RewardTable, ScoreKeeper};
use crate::output::print_stats;
use crate::store::ScoreStore;

/// Print the persisted points and streak
pub fn run_stats<S: ScoreStore>(store: S) {
    let scores = ScoreKeeper::new(store, RewardTable::default());
    print_stats(scores.points(), scores.streak());
}
