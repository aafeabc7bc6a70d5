//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `question`: Quiz question and answer feedback
//! - `transaction`: Transaction cards, buckets and grading rows
//! - `score`: Persisted counters and per-check results
//! - `error`: Error types for the HST tutor

pub mod error;
pub mod question;
pub mod score;
pub mod transaction;

pub use error::HstError;
pub use question::{Feedback, Question};
pub use score::{PlayerStanding, ScoreResult, ScoreState};
pub use transaction::{Bucket, PlacementAction, PlacementRecord, PlayerId, TransactionRecord};
