//! Asynchronous batch grading strategy
//!
//! Multi-threaded implementation of `GradingStrategy` with player-based
//! partitioning.
//!
//! # Architecture
//!
//! ```text
//! AsyncGradingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     ├── BatchProcessor (player partitioning + tokio tasks)
//!     └── AsyncMatchGrader (thread-safe row processing)
//!         └── AsyncScoreBoard (DashMap of player sessions)
//! ```
//!
//! Batches are processed one after another so a player's rows keep their
//! order across batch boundaries. Inside a batch, players run in parallel.

use crate::core::r#async::{AsyncMatchGrader, AsyncScoreBoard, BatchProcessor};
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::write_standings_csv;
use crate::strategy::GradingStrategy;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Configuration for batch grading
#[derive(Clone, Debug, PartialEq)]
pub struct BatchConfig {
    /// Number of rows per batch
    pub batch_size: usize,
    /// Number of tokio worker threads
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// Zero values fall back to the defaults with a warning.
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size,
                default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            tracing::warn!(
                "Invalid max_concurrent_batches ({}), using default ({})",
                max_concurrent_batches,
                default.max_concurrent_batches
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch grading strategy
#[derive(Debug, Clone)]
pub struct AsyncGradingStrategy {
    config: BatchConfig,
}

impl AsyncGradingStrategy {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl GradingStrategy for AsyncGradingStrategy {
    fn grade(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

        runtime.block_on(async {
            let score_board = Arc::new(AsyncScoreBoard::new());
            let grader = Arc::new(AsyncMatchGrader::new(Arc::clone(&score_board)));
            let processor = BatchProcessor::new(Arc::clone(&grader));

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| format!("Failed to open file '{}': {}", input_path.display(), e))?;

            // csv-async reads futures::io::AsyncRead
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);

            let mut batches = 0usize;
            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }

                // Wait for the whole batch before reading the next one
                let results = processor.process_batch(batch).await;
                for processed in &results {
                    if let Err(e) = &processed.result {
                        tracing::warn!("Grading error: {}", e);
                    }
                }
                batches += 1;
            }

            tracing::info!(
                "Graded {} batches from {}",
                batches,
                input_path.display()
            );

            write_standings_csv(&score_board.standings(), output)?;

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_async_strategy_grades_multiple_players() {
        let csv_content = "action,player,text,payable\n\
            payable,1,Sold goods for $500 + HST,true\n\
            payable,2,Bought new computer for $1000 + HST,false\n\
            check,1,,\n\
            check,2,,\n";
        let file = create_temp_csv(csv_content);

        let strategy = AsyncGradingStrategy::new(BatchConfig::default());
        let mut output = Vec::new();
        assert!(strategy.grade(file.path(), &mut output).is_ok());

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "player,games_played,correct_total\n1,1,1\n2,1,0\n"
        );
    }

    #[test]
    fn test_async_strategy_handles_missing_file() {
        let strategy = AsyncGradingStrategy::new(BatchConfig::default());
        let mut output = Vec::new();

        let result = strategy.grade(Path::new("nonexistent.csv"), &mut output);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to open file"));
    }

    #[test]
    fn test_async_strategy_maintains_ordering_across_batches() {
        // Player 1's drops and checks span several batches of two rows
        let csv_content = "action,player,text,payable\n\
            payable,1,Sold goods for $500 + HST,true\n\
            check,2,,\n\
            check,1,,\n\
            recoverable,1,Bought office supplies for $200 + HST,false\n\
            check,1,,\n";
        let file = create_temp_csv(csv_content);

        let strategy = AsyncGradingStrategy::new(BatchConfig::new(2, 2));
        let mut output = Vec::new();
        assert!(strategy.grade(file.path(), &mut output).is_ok());

        // First check scores 1 card, second check scores 2
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "player,games_played,correct_total\n1,2,3\n2,1,0\n"
        );
    }

    #[rstest::rstest]
    #[case::zero_batch_size(0, 4, 1000, 4)]
    #[case::zero_workers(50, 0, 50, num_cpus::get())]
    #[case::custom(50, 4, 50, 4)]
    fn test_batch_config_fallbacks(
        #[case] batch_size: usize,
        #[case] workers: usize,
        #[case] expected_batch_size: usize,
        #[case] expected_workers: usize,
    ) {
        let config = BatchConfig::new(batch_size, workers);
        assert_eq!(config.batch_size, expected_batch_size);
        assert_eq!(config.max_concurrent_batches, expected_workers);
    }
}
