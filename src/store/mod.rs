//! Settings persistence
//!
//! Player settings survive across runs through a [`SettingsStore`]. The
//! default store is a JSON file; an in-memory store backs tests and
//! ephemeral runs.

pub mod sink;

pub use sink::{LogSink, ScoreReport, ScoreSink};

use crate::core::WordLength;
use crate::engine::Difficulty;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Persisted player settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Preferred difficulty
    pub difficulty: Difficulty,
    /// Preferred word length
    pub word_length: WordLength,
    /// Best total score seen across all runs
    pub high_score: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            word_length: WordLength::Five,
            high_score: 0,
        }
    }
}

impl Settings {
    /// Fold a finished run's total into the high score, keeping the maximum.
    ///
    /// Returns true when the high score improved.
    pub fn record_total(&mut self, total: i64) -> bool {
        if total > self.high_score {
            self.high_score = total;
            true
        } else {
            false
        }
    }
}

/// Errors from settings persistence
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("settings i/o failed: {0}")]
    Io(#[from] io::Error),
    /// The stored settings could not be parsed
    #[error("settings file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Where settings are loaded from and saved to
pub trait SettingsStore {
    /// Load the stored settings, falling back to defaults when nothing has
    /// been stored yet.
    ///
    /// # Errors
    /// Returns a `StoreError` when the backing storage fails.
    fn load(&self) -> Result<Settings, StoreError>;

    /// Persist the settings.
    ///
    /// # Errors
    /// Returns a `StoreError` when the backing storage fails.
    fn save(&mut self, settings: &Settings) -> Result<(), StoreError>;
}

/// Settings stored as a JSON file
///
/// A missing file loads as defaults; a corrupt file is reported with a
/// warning and also loads as defaults, so a damaged settings file never
/// blocks play.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Settings, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Settings::default());
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&content) {
            Ok(settings) => Ok(settings),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ignoring corrupt settings file");
                Ok(Settings::default())
            }
        }
    }

    fn save(&mut self, settings: &Settings) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Settings held only in memory, for tests and `--no-save` runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    settings: Settings,
}

impl MemoryStore {
    /// Create a store seeded with the given settings.
    #[must_use]
    pub fn with(settings: Settings) -> Self {
        Self { settings }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Settings, StoreError> {
        Ok(self.settings)
    }

    fn save(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.settings = *settings;
        Ok(())
    }
}
