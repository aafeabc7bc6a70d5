//! Async batch grading engine
//!
//! This module provides `AsyncMatchGrader`, which applies grading rows to a
//! shared `AsyncScoreBoard`. It takes `&self` so one grader can be shared by
//! every task of a batch.

use std::sync::Arc;

use super::AsyncScoreBoard;
use crate::types::{HstError, PlacementAction, PlacementRecord, PlayerStanding, ScoreResult};

/// Thread-safe grading row processor
#[derive(Debug, Clone)]
pub struct AsyncMatchGrader {
    score_board: Arc<AsyncScoreBoard>,
}

impl AsyncMatchGrader {
    pub fn new(score_board: Arc<AsyncScoreBoard>) -> Self {
        Self { score_board }
    }

    /// Process a single grading row
    ///
    /// Same semantics as the synchronous `MatchGrader::process`. Each row is
    /// applied under the lock of its player's entry.
    pub fn process_row(&self, row: PlacementRecord) -> Result<Option<ScoreResult>, HstError> {
        match row.action {
            PlacementAction::Drop(bucket) => {
                let record = row
                    .record
                    .ok_or_else(|| HstError::missing_record(bucket.as_str(), row.player))?;

                let added = self
                    .score_board
                    .update(row.player, |session| session.board.place(record, bucket));
                if !added {
                    tracing::debug!(
                        "Player {} dropped a card already in {:?}, ignoring",
                        row.player,
                        bucket
                    );
                }
                Ok(None)
            }
            PlacementAction::Check => Ok(Some(
                self.score_board.update(row.player, |session| session.check()),
            )),
        }
    }

    /// Final counters of every player, sorted by player ID
    pub fn standings(&self) -> Vec<PlayerStanding> {
        self.score_board.standings()
    }
}
