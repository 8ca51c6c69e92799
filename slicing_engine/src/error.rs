//! Error types for storage and configuration.

use slicing_catalog::CatalogError;
use thiserror::Error;

/// Failures reported by a [`ProgressBackend`](crate::ProgressBackend).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("progress serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend cannot be used at all (e.g. a poisoned lock).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Failures while loading engine configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),
}
