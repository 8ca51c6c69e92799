//! Cumulative player progress - the record that survives between sessions.

use serde::{Deserialize, Deserializer, Serialize};
use slicing_catalog::{Achievement, LevelId};
use std::collections::BTreeMap;
use tracing::warn;

/// Everything the game remembers about a player.
///
/// Field names are part of the persisted format. Every field has a default, so records
/// written by older versions (missing fields) still load.
///
/// Invariants kept by every mutating method:
/// - `total_score` equals the sum of `scores`
/// - `scores` and `stars` only ever increase per level
/// - `completed_levels` and `achievements` hold no duplicates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameProgress {
    /// Not used by any rule; kept for the persisted shape.
    pub current_level: LevelId,
    pub completed_levels: Vec<LevelId>,
    /// Best score ever achieved per level.
    pub scores: BTreeMap<LevelId, u32>,
    /// Best star count (0-3) ever achieved per level.
    pub stars: BTreeMap<LevelId, u8>,
    pub total_score: u64,
    /// Ids this build does not know are dropped on load.
    #[serde(deserialize_with = "known_achievements")]
    pub achievements: Vec<Achievement>,
    /// Hint requests per level, accumulated across attempts.
    pub hints_used: BTreeMap<LevelId, u32>,
}

impl Default for GameProgress {
    fn default() -> Self {
        Self {
            current_level: LevelId(1),
            completed_levels: Vec::new(),
            scores: BTreeMap::new(),
            stars: BTreeMap::new(),
            total_score: 0,
            achievements: Vec::new(),
            hints_used: BTreeMap::new(),
        }
    }
}

impl GameProgress {
    /// The zero-valued record used when nothing was saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hints_used_for(&self, level: LevelId) -> u32 {
        self.hints_used.get(&level).copied().unwrap_or(0)
    }

    /// Count one hint request and return the new total for the level.
    pub fn record_hint(&mut self, level: LevelId) -> u32 {
        let count = self.hints_used.entry(level).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub fn best_score(&self, level: LevelId) -> u32 {
        self.scores.get(&level).copied().unwrap_or(0)
    }

    pub fn best_stars(&self, level: LevelId) -> u8 {
        self.stars.get(&level).copied().unwrap_or(0)
    }

    pub fn is_completed(&self, level: LevelId) -> bool {
        self.completed_levels.contains(&level)
    }

    /// Level 1 is always open; level N needs N-1 completed.
    pub fn is_unlocked(&self, level: LevelId) -> bool {
        match level.previous() {
            Some(prev) => self.is_completed(prev),
            None => true,
        }
    }

    pub fn has_achievement(&self, achievement: Achievement) -> bool {
        self.achievements.contains(&achievement)
    }

    /// Fold one scored attempt into the record.
    ///
    /// Keeps the best score and stars per level, marks the level completed, appends
    /// newly earned achievements and recomputes the total. Returns the achievements
    /// that were not held before.
    pub fn record_attempt(
        &mut self,
        level: LevelId,
        score: u32,
        stars: u8,
        earned: &[Achievement],
    ) -> Vec<Achievement> {
        if !self.is_completed(level) {
            self.completed_levels.push(level);
        }

        let best_score = self.scores.entry(level).or_insert(0);
        *best_score = (*best_score).max(score);
        let best_stars = self.stars.entry(level).or_insert(0);
        *best_stars = (*best_stars).max(stars);

        let mut unlocked = Vec::new();
        for achievement in earned {
            if !self.has_achievement(*achievement) {
                self.achievements.push(*achievement);
                unlocked.push(*achievement);
            }
        }

        self.recompute_total();
        unlocked
    }

    /// Sum of the best scores across all levels.
    pub fn recompute_total(&mut self) {
        self.total_score = self.scores.values().map(|s| u64::from(*s)).sum();
    }
}

/// Read achievement ids, skipping unknown ids and duplicates instead of rejecting the record.
fn known_achievements<'de, D>(deserializer: D) -> Result<Vec<Achievement>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = Vec::<String>::deserialize(deserializer)?;
    let mut achievements = Vec::with_capacity(ids.len());
    for id in &ids {
        match Achievement::from_id(id) {
            Some(achievement) if !achievements.contains(&achievement) => {
                achievements.push(achievement)
            }
            Some(_) => {}
            None => warn!(target: "progress", %id, "Dropping unknown achievement"),
        }
    }
    Ok(achievements)
}
