//! Score persistence
//!
//! Implementations of [`ScoreStore`] plus helpers that read and write a
//! [`ScoreState`] under its two well-known keys.
//!
//! - `InMemoryScoreStore` - process-local map, used by tests and dry runs
//! - `CsvScoreStore` - `key,value` CSV file that survives restarts

use crate::core::traits::ScoreStore;
use crate::types::{HstError, ScoreState};
use csv::{ReaderBuilder, Trim, Writer};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Store key for the number of completed match checks
pub const GAMES_PLAYED_KEY: &str = "gamesPlayed";

/// Store key for the cumulative number of correct cards
pub const CORRECT_TOTAL_KEY: &str = "correctTotal";

/// Read the persisted counters, treating missing keys as zero
pub fn load_score_state(store: &dyn ScoreStore) -> Result<ScoreState, HstError> {
    Ok(ScoreState {
        games_played: store.get(GAMES_PLAYED_KEY)?,
        correct_total: store.get(CORRECT_TOTAL_KEY)?,
    })
}

/// Persist both counters in a single store update
pub fn save_score_state(store: &mut dyn ScoreStore, state: &ScoreState) -> Result<(), HstError> {
    store.set_all(&[
        (GAMES_PLAYED_KEY, state.games_played),
        (CORRECT_TOTAL_KEY, state.correct_total),
    ])
}

/// Process-local counter store
#[derive(Debug, Clone, Default)]
pub struct InMemoryScoreStore {
    values: HashMap<String, u64>,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn get(&self, key: &str) -> Result<u64, HstError> {
        Ok(self.values.get(key).copied().unwrap_or(0))
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), HstError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// One stored counter row
#[derive(Debug, Deserialize)]
struct CounterRow {
    key: String,
    value: String,
}

/// File-backed counter store
///
/// The whole file is read when the store is opened and replaced on every
/// write. The new contents go to a sibling `.tmp` file that is then renamed
/// over the store, so a crash leaves either the old file or the new one. Values are kept as raw strings until read so a corrupt counter only
/// fails the lookup that touches it.
#[derive(Debug)]
pub struct CsvScoreStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl CsvScoreStore {
    /// Open a store at `path`
    ///
    /// A missing file is an empty store; it is created on the first `set`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, HstError> {
        let path = path.into();
        let mut values = BTreeMap::new();

        if path.exists() {
            let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(&path)?;
            for row in reader.deserialize::<CounterRow>() {
                let row = row?;
                values.insert(row.key, row.value);
            }
            tracing::debug!("Loaded {} counters from {}", values.len(), path.display());
        } else {
            tracing::debug!("No score file at {}, starting empty", path.display());
        }

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn flush(&self) -> Result<(), HstError> {
        let temp_path = self.temp_path();

        let mut writer = Writer::from_path(&temp_path)?;
        writer.write_record(["key", "value"])?;
        for (key, value) in &self.values {
            writer.write_record([key.as_str(), value.as_str()])?;
        }
        writer.flush()?;
        drop(writer);

        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl ScoreStore for CsvScoreStore {
    fn get(&self, key: &str) -> Result<u64, HstError> {
        match self.values.get(key) {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| HstError::invalid_counter(key, raw)),
            None => Ok(0),
        }
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), HstError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()?;
        tracing::debug!("Saved {}={} to {}", key, value, self.path.display());
        Ok(())
    }

    fn set_all(&mut self, values: &[(&str, u64)]) -> Result<(), HstError> {
        for (key, value) in values {
            self.values.insert(key.to_string(), value.to_string());
        }
        self.flush()?;
        tracing::debug!("Saved {} counters to {}", values.len(), self.path.display());
        Ok(())
    }
}
