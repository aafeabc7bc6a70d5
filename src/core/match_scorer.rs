//! Match scoring
//!
//! Scores a proposed classification of transaction cards into the payable
//! and recoverable buckets and folds the result into the running counters.
//!
//! Bucket contents are not checked against the canonical catalog: any card is
//! scored by its own `is_payable` flag. Empty buckets are valid.

use crate::core::match_board::MatchBoard;
use crate::types::{ScoreResult, ScoreState, TransactionRecord};

/// Stateless scorer for the matching game
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchScorer;

impl MatchScorer {
    /// Score two buckets against the current counters
    ///
    /// # Arguments
    ///
    /// * `payable` - Cards the player dropped on HST Payable
    /// * `recoverable` - Cards the player dropped on HST Recoverable
    /// * `state` - Counters before this check
    ///
    /// # Returns
    ///
    /// The per-check result and the counters after this check. The returned
    /// state always has `games_played` one higher and `correct_total` raised
    /// by the number of correct cards.
    pub fn score(
        payable: &[TransactionRecord],
        recoverable: &[TransactionRecord],
        state: ScoreState,
    ) -> (ScoreResult, ScoreState) {
        let correct_payable = payable.iter().filter(|r| r.is_payable).count() as u64;
        let correct_recoverable = recoverable.iter().filter(|r| !r.is_payable).count() as u64;

        let correct = correct_payable + correct_recoverable;
        let total = (payable.len() + recoverable.len()) as u64;

        let state = state.record_game(correct);

        (
            ScoreResult {
                correct,
                total,
                state,
            },
            state,
        )
    }

    /// Score both buckets of a board
    pub fn score_board(board: &MatchBoard, state: ScoreState) -> (ScoreResult, ScoreState) {
        Self::score(board.payable(), board.recoverable(), state)
    }
}
