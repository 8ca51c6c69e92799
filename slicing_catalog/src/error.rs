//! Errors raised while loading or validating catalog content.

use thiserror::Error;

use crate::levels::LevelId;

/// Failure modes when building a [`Catalog`](crate::Catalog) from external content.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The content file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The content is not valid TOML or does not match the catalog shape.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// Level ids must run 1, 2, 3, ... without gaps so the unlock chain is well formed.
    #[error("level ids must be a dense sequence starting at 1, found {found} at position {position}")]
    NonDenseLevelIds { position: usize, found: LevelId },

    #[error("level {level} references unknown pattern '{pattern_id}'")]
    UnknownPattern { level: LevelId, pattern_id: String },

    #[error("level {0} has no expected stories")]
    NoExpectedStories(LevelId),

    #[error("duplicate pattern id '{0}'")]
    DuplicatePattern(String),
}
