//! Progression and persistence tests.
//!
//! These tests verify:
//! - best-stars monotonicity
//! - the 15-cell advancement cycle
//! - fallback to a fresh record when the store is empty, broken or corrupt
//! - that save failures never stop play

use std::cell::Cell;
use std::fs;

use zoomy_twins::progress::DifficultyStars;
use zoomy_twins::{
    Difficulty, FileStore, GameMode, MemoryStore, ProgressRecord, ProgressStore,
    ProgressionController, StoreError, StoreFormat,
};

/// A store whose disk is always full.
struct BrokenStore {
    attempts: Cell<usize>,
}

impl ProgressStore for BrokenStore {
    fn load(&self) -> Result<Option<ProgressRecord>, StoreError> {
        self.attempts.set(self.attempts.get() + 1);
        Err(StoreError::Io(std::io::Error::other("disk full")))
    }

    fn save(&mut self, _record: &ProgressRecord) -> Result<(), StoreError> {
        self.attempts.set(self.attempts.get() + 1);
        Err(StoreError::Io(std::io::Error::other("disk full")))
    }
}

/// Best stars never go down.
#[test]
fn test_record_completion_is_monotonic() {
    let mut controller = ProgressionController::load(MemoryStore::new());

    controller.record_completion(GameMode::Colors, Difficulty::Easy, 3);
    controller.record_completion(GameMode::Colors, Difficulty::Easy, 1);

    assert_eq!(controller.stars(GameMode::Colors, Difficulty::Easy), 3);
    assert_eq!(controller.total_stars(), 3);
}

/// Fifteen advances walk every cell once and land back at the start.
#[test]
fn test_advance_cycles_all_cells() {
    let mut controller = ProgressionController::load(MemoryStore::new());
    let start = controller.current();
    assert_eq!(start, (GameMode::Colors, Difficulty::Easy));

    let mut visited = vec![start];
    for _ in 0..15 {
        visited.push(controller.advance());
    }

    assert_eq!(visited[15], start);
    let mut distinct = visited[..15].to_vec();
    distinct.sort();
    distinct.dedup();
    assert_eq!(distinct.len(), 15);

    assert_eq!(visited[3], (GameMode::Sizes, Difficulty::Easy));
    assert_eq!(visited[14], (GameMode::Where, Difficulty::Hard));
}

/// The current cell survives a reload.
#[test]
fn test_advance_persists() {
    let dir = tempfile::tempdir().unwrap();

    let mut controller = ProgressionController::load(FileStore::in_dir(dir.path(), StoreFormat::Json));
    controller.advance();
    controller.advance();
    controller.advance();
    controller.record_completion(GameMode::Colors, Difficulty::Hard, 3);

    let reloaded = ProgressionController::load(FileStore::in_dir(dir.path(), StoreFormat::Json));
    assert_eq!(reloaded.current(), (GameMode::Sizes, Difficulty::Easy));
    assert_eq!(reloaded.stars(GameMode::Colors, Difficulty::Hard), 3);
}

/// A failing store yields the default record and play continues.
#[test]
fn test_broken_store_falls_back() {
    let store = BrokenStore {
        attempts: Cell::new(0),
    };
    let mut controller = ProgressionController::load(store);
    assert_eq!(controller.record(), &ProgressRecord::default());

    controller.record_completion(GameMode::Wheels, Difficulty::Medium, 3);
    controller.advance();

    assert_eq!(controller.stars(GameMode::Wheels, Difficulty::Medium), 3);
    assert_eq!(controller.current(), (GameMode::Colors, Difficulty::Medium));
    assert_eq!(controller.store().attempts.get(), 3);
}

/// A corrupt file is treated like no file.
#[test]
fn test_corrupt_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::in_dir(dir.path(), StoreFormat::Json);
    fs::write(store.path(), "][").unwrap();

    let controller = ProgressionController::load(store);
    assert_eq!(controller.record(), &ProgressRecord::default());
}

/// Out-of-range stars in storage are clamped on load.
#[test]
fn test_loaded_stars_are_clamped() {
    let mut record = ProgressRecord::default();
    record.stars.details = DifficultyStars {
        easy: 1,
        medium: 9,
        hard: 0,
    };

    let controller = ProgressionController::load(MemoryStore::with_record(record));
    assert_eq!(controller.stars(GameMode::Details, Difficulty::Easy), 1);
    assert_eq!(controller.stars(GameMode::Details, Difficulty::Medium), 3);
}

/// The record round-trips losslessly in both file formats.
#[test]
fn test_round_trip_both_formats() {
    let mut record = ProgressRecord::default();
    record.mode = GameMode::Where;
    record.difficulty = Difficulty::Hard;
    record.sound_enabled = false;
    record.language = "de".to_string();
    for mode in GameMode::ALL {
        record.stars.raise(mode, Difficulty::Medium, 2);
    }

    for format in [StoreFormat::Json, StoreFormat::Binary] {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::in_dir(dir.path(), format);
        store.save(&record).unwrap();
        assert_eq!(store.load().unwrap(), Some(record.clone()), "{format:?}");
    }
}

/// The JSON file uses the documented keys.
#[test]
fn test_json_file_layout() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = ProgressionController::load(FileStore::in_dir(dir.path(), StoreFormat::Json));
    controller.record_completion(GameMode::Where, Difficulty::Easy, 3);
    controller.toggle_voice();

    let text = fs::read_to_string(controller.store().path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["stars"]["where"]["easy"], 3);
    assert_eq!(value["voiceEnabled"], false);
    assert_eq!(value["soundEnabled"], true);
    assert_eq!(value["mode"], "colors");
    assert_eq!(value["difficulty"], "easy");
}
