//! Levels: the epic the player slices and the stories the game expects back.

use serde::{Deserialize, Serialize};

/// Identifier of a level. Ids form the unlock chain 1, 2, 3, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelId(pub u32);

impl LevelId {
    /// The level that must be completed before this one can be played.
    pub fn previous(self) -> Option<LevelId> {
        if self.0 > 1 {
            Some(LevelId(self.0 - 1))
        } else {
            None
        }
    }
}

impl From<u32> for LevelId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for LevelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Difficulty band a level belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A story in template form, used both for epics and for expected answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStory {
    pub id: String,
    /// Full sentence as shown to the player.
    pub text: String,
    pub role: String,
    pub action: String,
    pub benefit: String,
}

impl UserStory {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        role: impl Into<String>,
        action: impl Into<String>,
        benefit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            role: role.into(),
            action: action.into(),
            benefit: benefit.into(),
        }
    }
}

/// A playable level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: LevelId,
    pub name: String,
    pub difficulty: Difficulty,
    /// Foreign key into the pattern list.
    pub pattern_id: String,
    pub epic: UserStory,
    pub expected_stories: Vec<UserStory>,
    #[serde(default)]
    pub hints: Vec<String>,
    /// Awarded when enough expected stories are covered.
    #[serde(default)]
    pub bonus_points: u32,
}

impl Level {
    /// Number of stories the level expects back.
    pub fn expected_count(&self) -> usize {
        self.expected_stories.len()
    }

    /// Level 1 is always open; any other level needs its predecessor completed.
    pub fn is_unlocked(&self, completed: &[LevelId]) -> bool {
        match self.id.previous() {
            Some(prev) => completed.contains(&prev),
            None => true,
        }
    }

    pub fn hint(&self, index: usize) -> Option<&str> {
        self.hints.get(index).map(String::as_str)
    }
}
