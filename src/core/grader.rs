//! Batch grading engine
//!
//! This module provides the `MatchGrader` that replays recorded match
//! sessions row by row against a `ScoreBoard`.

use crate::core::score_board::ScoreBoard;
use crate::types::{HstError, PlacementAction, PlacementRecord, PlayerStanding, ScoreResult};

/// Replays grading rows for many players
///
/// Rows for one player must be processed in input order; rows for different
/// players do not affect each other.
#[derive(Debug, Default)]
pub struct MatchGrader {
    score_board: ScoreBoard,
}

impl MatchGrader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single grading row
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ScoreResult))` for a check
    /// * `Ok(None)` for a drop, including a repeated drop that left the board
    ///   unchanged
    ///
    /// # Errors
    ///
    /// Returns an error if a drop row carries no card.
    pub fn process(&mut self, row: PlacementRecord) -> Result<Option<ScoreResult>, HstError> {
        match row.action {
            PlacementAction::Drop(bucket) => {
                let record = row
                    .record
                    .ok_or_else(|| HstError::missing_record(bucket.as_str(), row.player))?;

                if !self.score_board.place(row.player, record, bucket) {
                    tracing::debug!(
                        "Player {} dropped a card already in {:?}, ignoring",
                        row.player,
                        bucket
                    );
                }
                Ok(None)
            }
            PlacementAction::Check => Ok(Some(self.score_board.check(row.player))),
        }
    }

    /// Final counters of every player, sorted by player ID
    pub fn standings(&self) -> Vec<PlayerStanding> {
        self.score_board.standings()
    }
}
