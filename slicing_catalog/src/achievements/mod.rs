//! Achievement identifiers and their display metadata.

use serde::{Deserialize, Serialize};

/// Every achievement the game knows about.
///
/// `CrudMaster` and `WorkflowWizard` are declared for display but no scoring rule awards them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Achievement {
    FirstSlice,
    CrudMaster,
    WorkflowWizard,
    PerfectScore,
    NoHints,
    SpeedDemon,
    SpidrSupreme,
}

impl Achievement {
    pub const ALL: [Achievement; 7] = [
        Achievement::FirstSlice,
        Achievement::CrudMaster,
        Achievement::WorkflowWizard,
        Achievement::PerfectScore,
        Achievement::NoHints,
        Achievement::SpeedDemon,
        Achievement::SpidrSupreme,
    ];

    /// Stable id used in persisted progress.
    pub fn id(&self) -> &'static str {
        match self {
            Achievement::FirstSlice => "first-slice",
            Achievement::CrudMaster => "crud-master",
            Achievement::WorkflowWizard => "workflow-wizard",
            Achievement::PerfectScore => "perfect-score",
            Achievement::NoHints => "no-hints",
            Achievement::SpeedDemon => "speed-demon",
            Achievement::SpidrSupreme => "spidr-supreme",
        }
    }

    /// Inverse of [`Achievement::id`].
    pub fn from_id(id: &str) -> Option<Achievement> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }
}

impl std::fmt::Display for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Display data for an achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementDef {
    #[serde(rename = "id")]
    pub achievement: Achievement,
    pub name: String,
    pub description: String,
    pub icon: String,
}

impl AchievementDef {
    pub fn new(
        achievement: Achievement,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            achievement,
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }
}
