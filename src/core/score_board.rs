//! Per-player session state for the batch grader
//!
//! This module provides the `ScoreBoard` struct which keeps one match board
//! and one set of counters for every player seen in a grading input.
//!
//! The ScoreBoard is responsible for:
//! - Creating a player's session on their first row
//! - Applying drops to the player's board
//! - Scoring the player's board on a check
//! - Providing sorted standings for output

use crate::core::match_board::MatchBoard;
use crate::core::match_scorer::MatchScorer;
use crate::types::{
    Bucket, PlayerId, PlayerStanding, ScoreResult, ScoreState, TransactionRecord,
};
use std::collections::HashMap;

/// One player's board and counters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerSession {
    pub board: MatchBoard,
    pub state: ScoreState,
}

impl PlayerSession {
    /// Score the current board and fold the result into the counters
    ///
    /// The board is left as is; later drops add to it.
    pub fn check(&mut self) -> ScoreResult {
        let (result, state) = MatchScorer::score_board(&self.board, self.state);
        self.state = state;
        result
    }
}

/// Manages the sessions of all players in a grading run
#[derive(Debug, Default)]
pub struct ScoreBoard {
    /// Map of player IDs to their sessions
    sessions: HashMap<PlayerId, PlayerSession>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the session for a player
    pub fn session_mut(&mut self, player: PlayerId) -> &mut PlayerSession {
        self.sessions.entry(player).or_default()
    }

    /// Drop a card onto a player's board
    ///
    /// # Returns
    ///
    /// `true` if the card was added, `false` if it was already in that bucket
    pub fn place(&mut self, player: PlayerId, record: TransactionRecord, bucket: Bucket) -> bool {
        self.session_mut(player).board.place(record, bucket)
    }

    /// Score a player's board
    ///
    /// A player without any drops scores 0 out of 0 and still gets the game
    /// counted.
    pub fn check(&mut self, player: PlayerId) -> ScoreResult {
        self.session_mut(player).check()
    }

    /// Counters of every player, sorted by player ID
    pub fn standings(&self) -> Vec<PlayerStanding> {
        let mut standings: Vec<PlayerStanding> = self
            .sessions
            .iter()
            .map(|(&player, session)| PlayerStanding {
                player,
                state: session.state,
            })
            .collect();
        standings.sort_by_key(|standing| standing.player);
        standings
    }
}
