//! Synchronous grading strategy
//!
//! Single-threaded implementation of `GradingStrategy`. It streams rows with
//! `SyncReader`, replays them through `MatchGrader`, and writes the standings
//! with `csv_format::write_standings_csv`.
//!
//! Memory use is O(players + cards on their boards), not O(rows).

use crate::core::MatchGrader;
use crate::io::csv_format::write_standings_csv;
use crate::io::sync_reader::SyncReader;
use crate::strategy::GradingStrategy;
use std::io::Write;
use std::path::Path;

/// Synchronous grading strategy
///
/// # Examples
///
/// ```no_run
/// use hst_tutor::strategy::{GradingStrategy, SyncGradingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncGradingStrategy;
/// let mut output = io::stdout();
///
/// strategy.grade(Path::new("sessions.csv"), &mut output)
///     .expect("Grading failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncGradingStrategy;

impl GradingStrategy for SyncGradingStrategy {
    fn grade(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let mut grader = MatchGrader::new();
        let reader = SyncReader::new(input_path)?;

        let mut processed = 0usize;
        let mut skipped = 0usize;
        for result in reader {
            match result {
                Ok(row) => {
                    if let Err(e) = grader.process(row) {
                        tracing::warn!("Grading error: {}", e);
                        skipped += 1;
                    } else {
                        processed += 1;
                    }
                }
                Err(e) => {
                    tracing::warn!("Skipping grading row: {}", e);
                    skipped += 1;
                }
            }
        }

        tracing::info!(
            "Graded {} rows from {} ({} skipped)",
            processed,
            input_path.display(),
            skipped
        );

        write_standings_csv(&grader.standings(), output)?;

        Ok(())
    }
}
