//! Progress persisted through the file backend across sessions.

use std::time::Duration;

use slicing_catalog::{Achievement, Catalog, LevelId};
use slicing_engine::{
    EngineConfig, FileBackend, GameProgress, GameSession, ManualClock, ProgressBackend,
    ProgressStore, StoryDraft, DEFAULT_STORAGE_KEY,
};
use tempfile::TempDir;

fn open(dir: &TempDir, clock: &ManualClock) -> GameSession {
    let store = ProgressStore::with_default_key(Box::new(FileBackend::new(dir.path())));
    GameSession::new(Catalog::builtin(), store, clock.clone())
}

#[test]
fn test_progress_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let clock = ManualClock::new(0);

    let mut session = open(&dir, &clock);
    session.start_level(LevelId(1));
    session.add_story(StoryDraft::new("administrador", "crear nuevos usuarios", "dar acceso"));
    session.add_story(StoryDraft::new("administrador", "eliminar usuarios", "revocar accesos"));
    clock.advance(Duration::from_secs(30));
    let results = session.validate_and_submit().unwrap();
    assert_eq!(results.stars, 1);

    let backend = FileBackend::new(dir.path());
    assert!(backend.path_for(DEFAULT_STORAGE_KEY).exists());

    let reopened = open(&dir, &clock);
    assert_eq!(reopened.progress(), session.progress());
    assert!(reopened.progress().has_achievement(Achievement::SpeedDemon));
    assert!(reopened.is_level_unlocked(LevelId(2)));
}

#[test]
fn test_hints_are_persisted_with_next_submission() {
    let dir = TempDir::new().unwrap();
    let clock = ManualClock::new(0);

    let mut session = open(&dir, &clock);
    session.start_level(LevelId(2));
    session.use_hint();
    session.use_hint();
    // Not saved until the level is submitted.
    assert_eq!(open(&dir, &clock).progress().hints_used_for(LevelId(2)), 0);

    session.validate_and_submit();
    assert_eq!(open(&dir, &clock).progress().hints_used_for(LevelId(2)), 2);
}

#[test]
fn test_corrupt_file_starts_fresh() {
    let dir = TempDir::new().unwrap();
    let mut backend = FileBackend::new(dir.path());
    backend.write(DEFAULT_STORAGE_KEY, "\u{0}garbage").unwrap();

    let session = open(&dir, &ManualClock::new(0));
    assert_eq!(session.progress(), &GameProgress::new());
}

#[test]
fn test_reset_removes_file() {
    let dir = TempDir::new().unwrap();
    let clock = ManualClock::new(0);
    let mut session = open(&dir, &clock);
    session.start_level(LevelId(1));
    session.validate_and_submit();

    session.reset_progress();

    let backend = FileBackend::new(dir.path());
    assert!(!backend.path_for(DEFAULT_STORAGE_KEY).exists());
    assert_eq!(backend.read(DEFAULT_STORAGE_KEY).unwrap(), None);
    assert_eq!(open(&dir, &clock).progress(), &GameProgress::new());
}

#[test]
fn test_config_builds_file_backed_session() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    let config = EngineConfig::from_toml_str(&format!(
        "storage_key = \"player-one\"\ndata_dir = {:?}\n",
        data_dir.display().to_string()
    ))
    .unwrap();

    let mut session = config.build_session().unwrap();
    session.start_level(LevelId(1));
    session.validate_and_submit();

    assert!(data_dir.join("player-one.json").exists());
}

#[test]
fn test_config_loads_custom_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.toml");
    std::fs::write(
        &catalog_path,
        r#"
[[patterns]]
id = "users"
name = "One user at a time"
description = "Split by role"
icon = "Users"
color = "blue"

[[levels]]
id = 1
name = "Roles"
difficulty = "beginner"
patternId = "users"
bonusPoints = 50

[levels.epic]
id = "epic-1"
text = "Serve every role"
role = "owner"
action = "serve every role"
benefit = "to grow"

[[levels.expectedStories]]
id = "s1"
text = "Serve customers"
role = "owner"
action = "serve customers"
benefit = "to sell"
"#,
    )
    .unwrap();

    let config = EngineConfig {
        catalog_path: Some(catalog_path),
        ..Default::default()
    };
    let mut session = config.build_session().unwrap();
    session.start_level(LevelId(1));
    session.add_story(StoryDraft::new("owner", "help customers", "to sell"));
    let results = session.validate_and_submit().unwrap();

    assert_eq!(results.correct_count, 1);
    assert_eq!(results.stars, 3);
    assert_eq!(results.breakdown.pattern_bonus, 50);
}
