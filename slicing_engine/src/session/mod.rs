//! Session state - the attempt in progress and the screen the player is on.
//!
//! [`SessionState`] holds the transient, per-attempt data and its local transitions.
//! [`GameSession`] is the controller the presentation layer talks to: it owns the
//! catalog, the progress store and the clock, and routes every intent through them.

mod controller;
mod story;

pub use controller::*;
pub use story::*;

use serde::{Deserialize, Serialize};
use slicing_catalog::{Difficulty, LevelId};

use crate::scoring::{ScoreBreakdown, SubmissionOutcome};

/// Screens the presentation layer can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Home,
    Tutorial,
    LevelSelect,
    Game,
    Results,
    Patterns,
}

/// Summary of the last submission, as shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelResults {
    pub score: u32,
    pub stars: u8,
    pub correct_count: usize,
    pub total_expected: usize,
    pub bonus_no_hints: bool,
    pub bonus_speed: bool,
    pub breakdown: ScoreBreakdown,
}

impl From<&SubmissionOutcome> for LevelResults {
    fn from(outcome: &SubmissionOutcome) -> Self {
        Self {
            score: outcome.score(),
            stars: outcome.stars,
            correct_count: outcome.correct_count,
            total_expected: outcome.total_expected,
            bonus_no_hints: outcome.bonus_no_hints,
            bonus_speed: outcome.bonus_speed,
            breakdown: outcome.breakdown,
        }
    }
}

/// Transient state of the current attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub screen: Screen,
    pub difficulty: Difficulty,
    pub current_level: LevelId,
    pub stories: Vec<CreatedStory>,
    pub hint_visible: bool,
    /// Index of the furthest hint revealed; `None` until the first hint.
    pub hint_index: Option<usize>,
    /// Wall-clock milliseconds when the attempt started.
    pub level_started_at: u64,
    pub last_results: Option<LevelResults>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            screen: Screen::Home,
            difficulty: Difficulty::Beginner,
            current_level: LevelId(1),
            stories: Vec::new(),
            hint_visible: false,
            hint_index: None,
            level_started_at: 0,
            last_results: None,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a fresh attempt. The only place an attempt is reset.
    pub fn start_level(&mut self, level: LevelId, now_millis: u64) {
        self.current_level = level;
        self.stories.clear();
        self.hint_visible = false;
        self.hint_index = None;
        self.level_started_at = now_millis;
        self.screen = Screen::Game;
    }

    /// Append a story with a fresh id and return that id.
    pub fn add_story(&mut self, draft: StoryDraft) -> StoryId {
        let story = CreatedStory::from_draft(draft);
        let id = story.id;
        self.stories.push(story);
        id
    }

    /// Edit a story in place. Returns false if no story has that id.
    pub fn update_story(&mut self, id: StoryId, draft: StoryDraft) -> bool {
        match self.stories.iter_mut().find(|s| s.id == id) {
            Some(story) => {
                story.apply_draft(draft);
                true
            }
            None => false,
        }
    }

    /// Remove a story. Returns false if no story has that id.
    pub fn remove_story(&mut self, id: StoryId) -> bool {
        let before = self.stories.len();
        self.stories.retain(|s| s.id != id);
        self.stories.len() != before
    }

    pub fn story(&self, id: StoryId) -> Option<&CreatedStory> {
        self.stories.iter().find(|s| s.id == id)
    }

    /// Show the hint panel and move to the next hint, holding at the last one.
    pub fn reveal_next_hint(&mut self, hint_count: usize) {
        self.hint_visible = true;
        let next = self.hint_index.map_or(0, |i| i + 1);
        if next < hint_count {
            self.hint_index = Some(next);
        }
    }

    /// Hide the hint panel; the revealed index is kept.
    pub fn close_hint(&mut self) {
        self.hint_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_level_resets_attempt() {
        let mut state = SessionState::new();
        state.add_story(StoryDraft::new("a", "b", "c"));
        state.reveal_next_hint(3);
        state.screen = Screen::Results;

        state.start_level(LevelId(2), 5_000);

        assert_eq!(state.current_level, LevelId(2));
        assert!(state.stories.is_empty());
        assert!(!state.hint_visible);
        assert_eq!(state.hint_index, None);
        assert_eq!(state.level_started_at, 5_000);
        assert_eq!(state.screen, Screen::Game);
    }

    #[test]
    fn test_add_and_remove_story() {
        let mut state = SessionState::new();
        let first = state.add_story(StoryDraft::new("a", "b", "c"));
        let second = state.add_story(StoryDraft::new("d", "e", "f"));
        assert_ne!(first, second);

        assert!(state.remove_story(first));
        assert!(!state.remove_story(first));
        assert_eq!(state.stories.len(), 1);
        assert!(state.story(second).is_some());
        assert!(!state.remove_story(StoryId::new()));
    }

    #[test]
    fn test_update_story() {
        let mut state = SessionState::new();
        let id = state.add_story(StoryDraft::new("a", "b", "c"));
        assert!(state.update_story(id, StoryDraft::new("x", "y", "z")));
        assert_eq!(state.story(id).unwrap().action, "y");
        assert!(!state.update_story(StoryId::new(), StoryDraft::default()));
    }

    #[test]
    fn test_hint_index_holds_at_last() {
        let mut state = SessionState::new();
        state.reveal_next_hint(2);
        assert_eq!(state.hint_index, Some(0));
        state.reveal_next_hint(2);
        assert_eq!(state.hint_index, Some(1));
        state.reveal_next_hint(2);
        assert_eq!(state.hint_index, Some(1));
        assert!(state.hint_visible);
    }

    #[test]
    fn test_no_hints_keeps_index_empty() {
        let mut state = SessionState::new();
        state.reveal_next_hint(0);
        assert!(state.hint_visible);
        assert_eq!(state.hint_index, None);
    }

    #[test]
    fn test_close_hint_keeps_index() {
        let mut state = SessionState::new();
        state.reveal_next_hint(3);
        state.close_hint();
        assert!(!state.hint_visible);
        assert_eq!(state.hint_index, Some(0));
        state.reveal_next_hint(3);
        assert_eq!(state.hint_index, Some(1));
    }

    #[test]
    fn test_screen_names() {
        assert_eq!(serde_json::to_value(Screen::LevelSelect).unwrap(), "level-select");
        assert_eq!(serde_json::to_value(Screen::Home).unwrap(), "home");
    }
}
