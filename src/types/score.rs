//! Score-related types for the HST tutor
//!
//! `ScoreState` is the pair of persisted counters. `ScoreResult` is what a
//! single "Check Answers" press reports back to the presentation layer.

use super::transaction::PlayerId;
use std::fmt;

/// Running counters for the matching game
///
/// Both counters only ever grow. Additions saturate instead of wrapping so
/// the values stay monotonic even at the numeric limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    /// Completed match checks
    pub games_played: u64,

    /// Correctly bucketed cards, summed over every check
    pub correct_total: u64,
}

impl ScoreState {
    pub fn new(games_played: u64, correct_total: u64) -> Self {
        ScoreState {
            games_played,
            correct_total,
        }
    }

    /// Record one completed check with `correct` well-placed cards
    pub fn record_game(self, correct: u64) -> Self {
        ScoreState {
            games_played: self.games_played.saturating_add(1),
            correct_total: self.correct_total.saturating_add(correct),
        }
    }
}

/// Result of scoring one board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    /// Cards in the right bucket
    pub correct: u64,

    /// Cards on the board, right or wrong
    pub total: u64,

    /// Counters after this check was recorded
    pub state: ScoreState,
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "✅ You matched {} out of {} correctly!",
            self.correct, self.total
        )?;
        writeln!(
            f,
            "📊 Total Correct Across Games: {}",
            self.state.correct_total
        )?;
        write!(f, "🎮 Games Played: {}", self.state.games_played)
    }
}

/// Final counters for one player, as written by the batch grader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStanding {
    pub player: PlayerId,
    pub state: ScoreState,
}
