//! Persistent high score: a single JSON record, `{"high_score": N}`.
//!
//! Loading never fails from the caller's point of view: a missing, unreadable
//! or malformed record counts as 0. Saving is best-effort and atomic.

use crate::core::constants::HIGH_SCORE_FILE;
use crate::utils::persistence::{save_json, save_path};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("high score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("high score file is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk layout of the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    #[serde(default)]
    pub high_score: u32,
}

#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Store at `~/.skyward/high_score.json`.
    pub fn new() -> io::Result<Self> {
        Ok(Self::at(save_path(HIGH_SCORE_FILE)?))
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store named `high_score.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::at(dir.join(HIGH_SCORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record. `Ok(None)` when no record has been saved yet.
    pub fn try_load(&self) -> Result<Option<u32>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record: HighScoreRecord = serde_json::from_str(&json)?;
        Ok(Some(record.high_score))
    }

    /// Stored high score, or 0 when there is none or it cannot be read.
    pub fn load(&self) -> u32 {
        match self.try_load() {
            Ok(Some(score)) => score,
            Ok(None) => {
                debug!(path = %self.path.display(), "no high score saved yet");
                0
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "could not load high score, starting from 0"
                );
                0
            }
        }
    }

    /// Replace the record with `value`.
    pub fn try_save(&self, value: u32) -> Result<(), StoreError> {
        save_json(&self.path, &HighScoreRecord { high_score: value })?;
        Ok(())
    }

    /// Best-effort save; a failure is logged and the previous record stays.
    pub fn save(&self, value: u32) {
        match self.try_save(value) {
            Ok(()) => info!(high_score = value, "high score saved"),
            Err(e) => warn!(
                path = %self.path.display(),
                high_score = value,
                error = %e,
                "could not save high score"
            ),
        }
    }
}
