//! High score persistence.
//!
//! The file format is a single JSON object: `{"high_score": 120}`.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from a [`HighScoreStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("high score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed high score file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Persistence collaborator for the best score across sessions
pub trait HighScoreStore {
    /// Read the stored high score (0 when nothing has been stored yet)
    fn load(&mut self) -> Result<u32, StoreError>;

    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// High score kept in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_err(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&mut self) -> Result<u32, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(self.io_err(e)),
        };
        let file: HighScoreFile =
            serde_json::from_str(&text).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(file.high_score)
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| self.io_err(e))?;
        }

        let body = serde_json::to_string_pretty(&HighScoreFile { high_score: score }).map_err(
            |source| StoreError::Parse {
                path: self.path.clone(),
                source,
            },
        )?;

        // Write-then-rename so a crash never leaves a truncated file behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))?;
        Ok(())
    }
}

/// In-memory store, for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    high_score: u32,
    saves: u32,
}

impl MemoryStore {
    pub fn new(high_score: u32) -> Self {
        Self {
            high_score,
            saves: 0,
        }
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Number of times `save` was called
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> Result<u32, StoreError> {
        Ok(self.high_score)
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.high_score = score;
        self.saves += 1;
        Ok(())
    }
}
