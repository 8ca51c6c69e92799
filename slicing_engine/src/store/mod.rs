//! Persistence for [`GameProgress`].
//!
//! A [`ProgressBackend`] is a tiny key/value interface so the real storage can be swapped
//! for an in-memory fake. [`ProgressStore`] sits on top of it, keeps the in-memory mirror
//! the rest of the engine reads, and turns every storage problem into a logged fallback
//! instead of an error for the player.

mod file;
mod memory;

pub use file::*;
pub use memory::*;

use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::progress::GameProgress;

/// Key the progress record is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "slicing-game-progress";

/// Whole-value key/value storage.
pub trait ProgressBackend {
    /// Read the value stored under `key`, `None` if nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value under `key`. Deleting a missing key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Owner of the player's progress: the persisted record and its in-memory mirror.
pub struct ProgressStore {
    backend: Box<dyn ProgressBackend>,
    key: String,
    progress: GameProgress,
}

impl ProgressStore {
    /// Open the store and load the saved record.
    ///
    /// Never fails: a missing, unreadable or malformed record yields the initial progress.
    pub fn load(backend: Box<dyn ProgressBackend>, key: impl Into<String>) -> Self {
        let key = key.into();
        let progress = Self::read_record(&*backend, &key);
        Self {
            backend,
            key,
            progress,
        }
    }

    /// Open the store under [`DEFAULT_STORAGE_KEY`].
    pub fn with_default_key(backend: Box<dyn ProgressBackend>) -> Self {
        Self::load(backend, DEFAULT_STORAGE_KEY)
    }

    fn read_record(backend: &dyn ProgressBackend, key: &str) -> GameProgress {
        match backend.read(key) {
            Ok(Some(raw)) => match serde_json::from_str::<GameProgress>(&raw) {
                Ok(progress) => {
                    info!(
                        target: "progress_store",
                        %key,
                        completed = progress.completed_levels.len(),
                        total_score = progress.total_score,
                        "Loaded saved progress"
                    );
                    progress
                }
                Err(e) => {
                    warn!(
                        target: "progress_store",
                        %key,
                        error = %e,
                        "Saved progress is malformed; starting fresh"
                    );
                    GameProgress::new()
                }
            },
            Ok(None) => {
                debug!(target: "progress_store", %key, "No saved progress; starting fresh");
                GameProgress::new()
            }
            Err(e) => {
                warn!(
                    target: "progress_store",
                    %key,
                    error = %e,
                    "Failed to read saved progress; starting fresh"
                );
                GameProgress::new()
            }
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The current in-memory progress.
    pub fn progress(&self) -> &GameProgress {
        &self.progress
    }

    /// Mutate the in-memory mirror without persisting. The change is written by the next `save`.
    pub(crate) fn progress_mut(&mut self) -> &mut GameProgress {
        &mut self.progress
    }

    /// Replace the record, in memory and in storage.
    ///
    /// The in-memory mirror is updated even if the write fails, so the session keeps
    /// going with the new values.
    pub fn save(&mut self, progress: GameProgress) -> Result<(), StoreError> {
        self.progress = progress;
        let raw = serde_json::to_string(&self.progress)?;
        self.backend.write(&self.key, &raw)?;
        debug!(target: "progress_store", key = %self.key, bytes = raw.len(), "Saved progress");
        Ok(())
    }

    /// Erase the saved record and restore the initial progress.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.progress = GameProgress::new();
        self.backend.remove(&self.key)?;
        info!(target: "progress_store", key = %self.key, "Progress reset");
        Ok(())
    }
}

impl std::fmt::Debug for ProgressStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressStore")
            .field("key", &self.key)
            .field("progress", &self.progress)
            .finish_non_exhaustive()
    }
}
