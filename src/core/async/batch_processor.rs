//! Batch processing with player-based partitioning for async grading
//!
//! This module provides the `BatchProcessor` struct, which splits a batch of
//! grading rows by player and replays each player's rows in a separate tokio
//! task.
//!
//! # Design
//!
//! Rows for one player always run sequentially and in input order inside one
//! task. Rows for different players touch different `AsyncScoreBoard` entries
//! and run concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use super::AsyncMatchGrader;
use crate::types::{HstError, PlacementRecord, PlayerId, ScoreResult};

/// Result of processing a single grading row
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// The row that was processed
    pub row: PlacementRecord,

    /// Score for a check, None for a drop, or the error that skipped the row
    pub result: Result<Option<ScoreResult>, HstError>,
}

/// Batch processor with player-based partitioning
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    /// Shared grader, cloned into every task
    grader: Arc<AsyncMatchGrader>,
}

impl BatchProcessor {
    pub fn new(grader: Arc<AsyncMatchGrader>) -> Self {
        Self { grader }
    }

    /// Partition a batch of rows by player ID
    ///
    /// # Guarantees
    ///
    /// - Each row appears in exactly one partition
    /// - Rows for each player keep their original order
    pub fn partition_by_player(
        &self,
        batch: Vec<PlacementRecord>,
    ) -> HashMap<PlayerId, Vec<PlacementRecord>> {
        let mut player_batches: HashMap<PlayerId, Vec<PlacementRecord>> = HashMap::new();

        for row in batch {
            player_batches.entry(row.player).or_default().push(row);
        }

        player_batches
    }

    /// Process all rows of one player sequentially
    ///
    /// Failed rows are captured in their result and do not stop the rest.
    pub async fn process_player_rows(&self, rows: Vec<PlacementRecord>) -> Vec<ProcessingResult> {
        let mut results = Vec::with_capacity(rows.len());

        for row in rows {
            let result = self.grader.process_row(row.clone());
            results.push(ProcessingResult { row, result });
        }

        results
    }

    /// Process a batch of rows with player-based partitioning
    ///
    /// Spawns one tokio task per player and waits for all of them. Results of
    /// different players may be interleaved in any order.
    pub async fn process_batch(&self, batch: Vec<PlacementRecord>) -> Vec<ProcessingResult> {
        let player_batches = self.partition_by_player(batch);

        let mut tasks = Vec::with_capacity(player_batches.len());
        for (_player, rows) in player_batches {
            let processor = self.clone();
            tasks.push(tokio::spawn(async move {
                processor.process_player_rows(rows).await
            }));
        }

        let mut results = Vec::new();
        for task in tasks {
            match task.await {
                Ok(player_results) => results.extend(player_results),
                Err(e) => tracing::error!("Grading task panicked: {:?}", e),
            }
        }

        results
    }
}
