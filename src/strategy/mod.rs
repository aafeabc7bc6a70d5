//! Grading strategy module
//!
//! This module defines the Strategy pattern for complete batch grading
//! pipelines, from reading recorded sessions to writing player standings.
//! Different implementations (synchronous, asynchronous batch) can be
//! selected at runtime and produce identical output.

use crate::cli::StrategyType;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncGradingStrategy, BatchConfig};
pub use sync::SyncGradingStrategy;

/// Grading strategy trait for complete batch grading pipelines
pub trait GradingStrategy: Send + Sync {
    /// Grade recorded sessions from `input_path` and write standings to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened
    /// - A fatal I/O error occurs during reading or writing
    /// - Output cannot be written
    ///
    /// Individual row errors are logged and skipped; they do not fail the run.
    fn grade(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String>;
}

/// Create a grading strategy based on the specified strategy type
///
/// `config` is only used by the async strategy; defaults apply when it is
/// None.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn GradingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncGradingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncGradingStrategy::new(config))
        }
    }
}
