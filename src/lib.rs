//! HST Tutor Library
//! # Overview
//!
//! This library provides two learning widgets for sales-tax (HST) accounting,
//! plus a batch grader that replays recorded match sessions with both a sync
//! and an async strategy.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Question, TransactionRecord, ScoreState, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::quiz_engine`] - Question generation and answer checking
//!   - [`core::match_scorer`] - Scoring of bucketed cards into running counters
//!   - [`core::score_store`] - Counter persistence
//!   - [`core::grader`] - Replay of recorded match sessions per player
//! - [`io`] - Grading input parsing and standings output
//! - [`strategy`] - Pluggable grading pipelines
//! - [`session`] - Terminal presentation of the quiz and the match game
//!
//! # Quiz
//!
//! Each question asks for the tax-inclusive total of a sale and offers three
//! amounts:
//!
//! - **Correct**: `round(price * 1.13)`
//! - **Wrong rate**: `round(price * 1.3)`
//! - **No tax**: `round(price)`
//!
//! # Match Game
//!
//! Transaction cards are dropped into two accounts:
//! - `HST Payable`: tax collected on sales
//! - `HST Recoverable`: tax paid on purchases
//!
//! Every check adds one to `games_played` and the number of correctly placed
//! cards to `correct_total`.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod session;
pub mod strategy;
pub mod types;

pub use core::{MatchBoard, MatchGrader, MatchScorer, QuizConfig, QuizEngine, ScoreStore};
pub use io::write_standings_csv;
pub use types::{
    Bucket, Feedback, HstError, PlayerId, PlayerStanding, Question, ScoreResult, ScoreState,
    TransactionRecord,
};
