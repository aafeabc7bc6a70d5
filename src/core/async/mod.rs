//! Asynchronous implementations of the grading components
//!
//! Thread-safe counterparts of the synchronous grader, backed by DashMap.
//!
//! - **AsyncScoreBoard**: per-player sessions with entry-level locking
//! - **AsyncMatchGrader**: applies grading rows through `&self`
//! - **BatchProcessor**: partitions batches by player and spawns tokio tasks
//!
//! Rows for one player are serialized; different players proceed in parallel.

pub mod batch_processor;
pub mod grader;
pub mod score_board;

pub use batch_processor::BatchProcessor;
pub use grader::AsyncMatchGrader;
pub use score_board::AsyncScoreBoard;
