//! The controller that turns player intents into state changes.

use serde::Serialize;
use slicing_catalog::{Catalog, Difficulty, Level, LevelId};
use tracing::{debug, info, warn};

use super::{LevelResults, Screen, SessionState, StoryDraft, StoryId};
use crate::clock::{elapsed_between, Clock, SystemClock};
use crate::progress::GameProgress;
use crate::scoring::{score_submission, ScoringRules, Submission};
use crate::store::ProgressStore;

/// Everything the presentation layer needs to render, detached from the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub session: SessionState,
    pub progress: GameProgress,
}

/// One player's game: session state plus exclusive ownership of their progress.
///
/// Every method handles one intent to completion. Operations that reference a level
/// missing from the catalog do nothing.
pub struct GameSession {
    catalog: Catalog,
    store: ProgressStore,
    clock: Box<dyn Clock>,
    rules: ScoringRules,
    state: SessionState,
}

impl GameSession {
    /// Create a session on the home screen.
    pub fn new(catalog: Catalog, store: ProgressStore, clock: impl Clock + 'static) -> Self {
        Self {
            catalog,
            store,
            clock: Box::new(clock),
            rules: ScoringRules::default(),
            state: SessionState::new(),
        }
    }

    /// Create a session with the built-in catalog and the system clock.
    pub fn with_builtin_catalog(store: ProgressStore) -> Self {
        Self::new(Catalog::builtin(), store, SystemClock)
    }

    /// Replace the scoring constants.
    pub fn with_rules(mut self, rules: ScoringRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn progress(&self) -> &GameProgress {
        self.store.progress()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            session: self.state.clone(),
            progress: self.store.progress().clone(),
        }
    }

    /// Switch screens without touching the attempt.
    pub fn navigate(&mut self, screen: Screen) {
        debug!(target: "session", from = ?self.state.screen, to = ?screen, "Navigate");
        self.state.screen = screen;
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.state.difficulty = difficulty;
    }

    /// The level being played, if it exists in the catalog.
    pub fn current_level(&self) -> Option<&Level> {
        self.catalog.level(self.state.current_level)
    }

    /// Levels of the selected difficulty.
    pub fn filtered_levels(&self) -> Vec<&Level> {
        self.catalog.levels_by_difficulty(self.state.difficulty)
    }

    pub fn is_level_unlocked(&self, level: LevelId) -> bool {
        self.catalog.level(level).is_some() && self.store.progress().is_unlocked(level)
    }

    /// Begin a fresh attempt at `level`.
    ///
    /// Hint counters in progress are left alone, so hints requested on earlier
    /// attempts still count against the no-hints bonus.
    pub fn start_level(&mut self, level: LevelId) {
        let now = self.clock.now_millis();
        self.state.start_level(level, now);
        info!(target: "session", %level, "Level started");
    }

    pub fn add_story(&mut self, draft: StoryDraft) -> StoryId {
        let id = self.state.add_story(draft);
        debug!(target: "session", %id, stories = self.state.stories.len(), "Story added");
        id
    }

    /// Edit an unsubmitted story. Unknown ids are ignored.
    pub fn update_story(&mut self, id: StoryId, draft: StoryDraft) {
        if !self.state.update_story(id, draft) {
            debug!(target: "session", %id, "Update ignored: no such story");
        }
    }

    /// Unknown ids are ignored.
    pub fn remove_story(&mut self, id: StoryId) {
        if self.state.remove_story(id) {
            debug!(target: "session", %id, stories = self.state.stories.len(), "Story removed");
        }
    }

    /// Reveal the next hint and count the request.
    ///
    /// Every call counts, including calls that cannot advance past the last hint.
    pub fn use_hint(&mut self) {
        let level = self.state.current_level;
        let Some(hint_count) = self.catalog.level(level).map(|l| l.hints.len()) else {
            warn!(target: "session", %level, "Hint requested for unknown level");
            return;
        };

        self.state.reveal_next_hint(hint_count);
        let used = self.store.progress_mut().record_hint(level);
        debug!(target: "session", %level, index = ?self.state.hint_index, used, "Hint used");
    }

    pub fn close_hint(&mut self) {
        self.state.close_hint();
    }

    /// Text of the revealed hint while the panel is open.
    pub fn current_hint(&self) -> Option<&str> {
        if !self.state.hint_visible {
            return None;
        }
        let index = self.state.hint_index?;
        self.current_level()?.hint(index)
    }

    /// Score the attempt, merge it into progress, persist, and show the results.
    ///
    /// Returns `None` without changing anything if the current level is unknown.
    pub fn validate_and_submit(&mut self) -> Option<LevelResults> {
        let level_id = self.state.current_level;
        let Some(level) = self.catalog.level(level_id) else {
            warn!(target: "session", level = %level_id, "Submit ignored: unknown level");
            return None;
        };

        let now = self.clock.now_millis();
        let hints_used = self.store.progress().hints_used_for(level_id);
        let outcome = score_submission(
            Submission {
                level,
                stories: &self.state.stories,
                elapsed: elapsed_between(self.state.level_started_at, now),
                hints_used,
            },
            &self.rules,
        );
        let results = LevelResults::from(&outcome);

        let mut progress = self.store.progress().clone();
        let unlocked =
            progress.record_attempt(level_id, results.score, results.stars, &outcome.achievements);
        if let Err(e) = self.store.save(progress) {
            warn!(
                target: "session",
                level = %level_id,
                error = %e,
                "Failed to persist progress; continuing"
            );
        }

        info!(
            target: "session",
            level = %level_id,
            score = results.score,
            stars = results.stars,
            correct = results.correct_count,
            expected = results.total_expected,
            unlocked = ?unlocked,
            "Level submitted"
        );

        self.state.stories = outcome.stories;
        self.state.last_results = Some(results);
        self.state.screen = Screen::Results;
        Some(results)
    }

    /// Wipe all progress and return to the home screen.
    pub fn reset_progress(&mut self) {
        if let Err(e) = self.store.reset() {
            warn!(target: "session", error = %e, "Failed to erase saved progress");
        }
        self.state.screen = Screen::Home;
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("store", &self.store)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}
