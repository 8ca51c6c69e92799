//! Stories authored by the player during an attempt.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a player-authored story. Freshly generated, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryId(pub Uuid);

impl StoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "story-{}", self.0)
    }
}

/// The three free-text parts a player fills in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StoryDraft {
    pub role: String,
    pub action: String,
    pub benefit: String,
}

impl StoryDraft {
    pub fn new(
        role: impl Into<String>,
        action: impl Into<String>,
        benefit: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            action: action.into(),
            benefit: benefit.into(),
        }
    }
}

/// A story as it sits in the attempt. `is_valid` and `feedback` are only set by submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedStory {
    pub id: StoryId,
    pub role: String,
    pub action: String,
    pub benefit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_valid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl CreatedStory {
    pub fn from_draft(draft: StoryDraft) -> Self {
        Self {
            id: StoryId::new(),
            role: draft.role,
            action: draft.action,
            benefit: draft.benefit,
            is_valid: None,
            feedback: None,
        }
    }

    /// Replace the text parts, keeping the id.
    pub fn apply_draft(&mut self, draft: StoryDraft) {
        self.role = draft.role;
        self.action = draft.action;
        self.benefit = draft.benefit;
    }

    pub fn is_validated(&self) -> bool {
        self.is_valid.is_some()
    }
}
