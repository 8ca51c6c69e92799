//! The lookup table the engine reads levels and patterns from.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use crate::achievements::{Achievement, AchievementDef};
use crate::builtin;
use crate::error::CatalogError;
use crate::levels::{Difficulty, Level, LevelId};
use crate::patterns::{InvestCriterion, SlicingPattern};

/// Immutable game content.
///
/// Custom content can be loaded from TOML; `investCriteria` and `achievements`
/// fall back to the built-in lists when a file leaves them out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    patterns: Vec<SlicingPattern>,
    levels: Vec<Level>,
    #[serde(default = "builtin::invest_criteria")]
    invest_criteria: Vec<InvestCriterion>,
    #[serde(default = "builtin::achievements")]
    achievements: Vec<AchievementDef>,
}

impl Catalog {
    /// The content shipped with the game.
    pub fn builtin() -> Self {
        Self {
            patterns: builtin::patterns(),
            levels: builtin::levels(),
            invest_criteria: builtin::invest_criteria(),
            achievements: builtin::achievements(),
        }
    }

    /// Build a catalog from explicit patterns and levels, validating the result.
    pub fn new(patterns: Vec<SlicingPattern>, levels: Vec<Level>) -> Result<Self, CatalogError> {
        let catalog = Self {
            patterns,
            levels,
            invest_criteria: builtin::invest_criteria(),
            achievements: builtin::achievements(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate catalog content from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        debug!(
            target: "catalog",
            patterns = catalog.patterns.len(),
            levels = catalog.levels.len(),
            "Parsed catalog content"
        );
        Ok(catalog)
    }

    /// Read, parse and validate a TOML catalog file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        info!(target: "catalog", path = %path.display(), "Loaded catalog from file");
        Ok(catalog)
    }

    /// Check the structural invariants the engine relies on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut pattern_ids = HashSet::new();
        for pattern in &self.patterns {
            if !pattern_ids.insert(pattern.id.as_str()) {
                return Err(CatalogError::DuplicatePattern(pattern.id.clone()));
            }
        }

        for (position, level) in self.levels.iter().enumerate() {
            if level.id.0 as usize != position + 1 {
                return Err(CatalogError::NonDenseLevelIds {
                    position,
                    found: level.id,
                });
            }
            if !pattern_ids.contains(level.pattern_id.as_str()) {
                return Err(CatalogError::UnknownPattern {
                    level: level.id,
                    pattern_id: level.pattern_id.clone(),
                });
            }
            if level.expected_stories.is_empty() {
                return Err(CatalogError::NoExpectedStories(level.id));
            }
        }
        Ok(())
    }

    /// All levels in unlock order.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level(&self, id: LevelId) -> Option<&Level> {
        self.levels.iter().find(|l| l.id == id)
    }

    /// Levels of one difficulty band, in unlock order.
    pub fn levels_by_difficulty(&self, difficulty: Difficulty) -> Vec<&Level> {
        self.levels
            .iter()
            .filter(|l| l.difficulty == difficulty)
            .collect()
    }

    pub fn patterns(&self) -> &[SlicingPattern] {
        &self.patterns
    }

    pub fn pattern(&self, id: &str) -> Option<&SlicingPattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    /// The pattern a level is built around.
    pub fn pattern_for_level(&self, id: LevelId) -> Option<&SlicingPattern> {
        self.level(id).and_then(|l| self.pattern(&l.pattern_id))
    }

    pub fn invest_criteria(&self) -> &[InvestCriterion] {
        &self.invest_criteria
    }

    pub fn achievements(&self) -> &[AchievementDef] {
        &self.achievements
    }

    pub fn achievement_def(&self, achievement: Achievement) -> Option<&AchievementDef> {
        self.achievements
            .iter()
            .find(|a| a.achievement == achievement)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
