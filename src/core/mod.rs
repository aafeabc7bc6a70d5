//! Core business logic module
//!
//! This module contains the quiz and matching-game components:
//! - `traits` - Score store abstraction
//! - `quiz_engine` - Question generation and answer checking
//! - `match_board` - The two drop targets of a matching session
//! - `match_scorer` - Scoring of bucketed cards into the running counters
//! - `score_store` - In-memory and CSV-file counter persistence
//! - `score_board` - Per-player sessions for batch grading
//! - `grader` - Synchronous batch grading
//! - `async` - Thread-safe batch grading

pub mod r#async;
pub mod grader;
pub mod match_board;
pub mod match_scorer;
pub mod quiz_engine;
pub mod score_board;
pub mod score_store;
pub mod traits;

pub use grader::MatchGrader;
pub use match_board::MatchBoard;
pub use match_scorer::MatchScorer;
pub use quiz_engine::{check_answer, question_for_price, QuizConfig, QuizEngine};
pub use r#async::{AsyncMatchGrader, AsyncScoreBoard, BatchProcessor};
pub use score_board::{PlayerSession, ScoreBoard};
pub use score_store::{
    load_score_state, save_score_state, CsvScoreStore, InMemoryScoreStore, CORRECT_TOTAL_KEY,
    GAMES_PLAYED_KEY,
};
pub use traits::ScoreStore;
