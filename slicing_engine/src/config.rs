//! Engine configuration loaded from TOML.
//!
//! Every field is optional; an empty document gives the shipped defaults:
//!
//! ```toml
//! storage_key = "slicing-game-progress"
//! data_dir = "/home/player/.local/share/story-slicing"   # omit for in-memory progress
//! catalog_path = "content/levels.toml"                    # omit for the built-in levels
//!
//! [scoring]
//! points_per_story = 50
//! speed_limit_secs = 120
//! ```

use serde::{Deserialize, Serialize};
use slicing_catalog::Catalog;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::clock::SystemClock;
use crate::error::ConfigError;
use crate::scoring::ScoringRules;
use crate::session::GameSession;
use crate::store::{FileBackend, MemoryBackend, ProgressBackend, ProgressStore, DEFAULT_STORAGE_KEY};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Key the progress record is saved under.
    pub storage_key: String,
    /// Directory for the file backend. Without it progress lives in memory only.
    pub data_dir: Option<PathBuf>,
    /// Custom catalog content. Without it the built-in catalog is used.
    pub catalog_path: Option<PathBuf>,
    pub scoring: ScoringRules,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
            catalog_path: None,
            scoring: ScoringRules::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(target: "slicing_engine", path = %path.display(), "Loaded engine config");
        Ok(config)
    }

    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => Ok(Catalog::from_toml_file(path)?),
            None => Ok(Catalog::builtin()),
        }
    }

    /// The backend the configuration points at.
    pub fn backend(&self) -> Box<dyn ProgressBackend> {
        match &self.data_dir {
            Some(dir) => Box::new(FileBackend::new(dir.clone())),
            None => Box::new(MemoryBackend::new()),
        }
    }

    /// Load the catalog and saved progress and start a session on the system clock.
    pub fn build_session(&self) -> Result<GameSession, ConfigError> {
        let catalog = self.load_catalog()?;
        let store = ProgressStore::load(self.backend(), self.storage_key.clone());
        Ok(GameSession::new(catalog, store, SystemClock).with_rules(self.scoring.clone()))
    }
}
