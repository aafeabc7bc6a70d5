//! Thread-safe per-player session state for async batch grading
//!
//! This module provides the `AsyncScoreBoard` struct, which stores player
//! sessions in a `DashMap` so rows for different players can be applied from
//! several tasks at once.
//!
//! # Thread Safety
//!
//! Every update runs while holding the lock on that player's map entry, so a
//! drop or a check is applied atomically to one player's board and counters.
//! Updates to different players proceed in parallel.

use crate::core::score_board::PlayerSession;
use crate::types::{PlayerId, PlayerStanding};
use dashmap::DashMap;

/// Thread-safe session manager for async batch grading
#[derive(Debug, Default)]
pub struct AsyncScoreBoard {
    /// Concurrent map of player IDs to their sessions
    sessions: DashMap<PlayerId, PlayerSession>,
}

impl AsyncScoreBoard {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Update a player's session using a closure
    ///
    /// The session is created first if the player is new. The closure runs
    /// while the entry is locked; no other task can observe a half-applied
    /// update.
    pub fn update<F, T>(&self, player: PlayerId, f: F) -> T
    where
        F: FnOnce(&mut PlayerSession) -> T,
    {
        let mut entry = self.sessions.entry(player).or_default();
        f(entry.value_mut())
    }

    /// Snapshot of one player's session
    #[cfg(test)]
    pub fn get(&self, player: PlayerId) -> Option<PlayerSession> {
        self.sessions.get(&player).map(|entry| entry.value().clone())
    }

    /// Counters of every player, sorted by player ID
    pub fn standings(&self) -> Vec<PlayerStanding> {
        let mut standings: Vec<PlayerStanding> = self
            .sessions
            .iter()
            .map(|entry| PlayerStanding {
                player: *entry.key(),
                state: entry.value().state,
            })
            .collect();
        standings.sort_by_key(|standing| standing.player);
        standings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bucket, ScoreState, TransactionRecord};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_update_creates_session() {
        let board = AsyncScoreBoard::new();
        assert!(board.get(1).is_none());

        board.update(1, |session| session.check());

        let session = board.get(1).unwrap();
        assert_eq!(session.state, ScoreState::new(1, 0));
    }

    #[test]
    fn test_update_returns_closure_value() {
        let board = AsyncScoreBoard::new();
        let added = board.update(1, |session| {
            session
                .board
                .place(TransactionRecord::new("Sold goods for $500 + HST", true), Bucket::Payable)
        });
        assert!(added);
    }

    #[test]
    fn test_concurrent_checks_on_one_player_are_not_lost() {
        let board = Arc::new(AsyncScoreBoard::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let board = Arc::clone(&board);
                thread::spawn(move || {
                    for _ in 0..100 {
                        board.update(7, |session| session.check());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(board.get(7).unwrap().state.games_played, 800);
    }

    #[test]
    fn test_standings_sorted() {
        let board = AsyncScoreBoard::new();
        board.update(3, |session| session.check());
        board.update(1, |session| session.check());
        board.update(2, |_| ());

        let players: Vec<PlayerId> = board.standings().iter().map(|s| s.player).collect();
        assert_eq!(players, vec![1, 2, 3]);
    }
}
