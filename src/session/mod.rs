//! Terminal presentation
//!
//! Line-oriented front ends for the two widgets. Each session reads commands
//! from any `BufRead` and writes to any `Write`, so the binary wires them to
//! stdin/stdout and tests drive them with in-memory buffers.
//!
//! - `quiz` - HST calculation challenge
//! - `matching` - HST account match game and counter display

pub mod matching;
pub mod quiz;

pub use matching::{parse_match_input, print_stats, run_match, MatchInput, MatchSession};
pub use quiz::{parse_quiz_input, run_quiz, QuizInput, QuizSession};
