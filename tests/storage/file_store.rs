//! Tests for FileStore.

use goal_tracker::{
    storage::{self, FileStore, GoalStore},
    Config, Error,
};
use goal_tracker_test_utils::prelude::*;

/// Tests that a missing file loads as an empty collection.
#[test]
fn missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("goals.json"));

    assert!(store.read().unwrap().is_none());
    assert!(store.load().unwrap().is_empty());
}

/// Tests that saved goals survive reopening the file, with parent directories created.
#[test]
fn round_trips_through_nested_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("goals.json");
    let goals = vec![
        factory::mock_goal(1, 3),
        factory::mock_delayed_goal(2, 1, 5),
    ];

    FileStore::new(&path).save(&goals).unwrap();

    assert_eq!(FileStore::new(&path).load().unwrap(), goals);
    assert!(!dir.path().join("data").join("goals.json.tmp").exists());
}

/// Tests that a corrupt file surfaces a serialization error.
#[test]
fn corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("goals.json");
    std::fs::write(&path, "{{{").unwrap();

    let result = FileStore::new(&path).load();

    assert!(matches!(result, Err(Error::Serialization(_))));
}

/// Tests that the platform store on native builds writes to the configured file.
#[test]
fn open_uses_configured_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        data_file: dir.path().join("configured.json"),
        ..Config::default()
    };

    let store = storage::open(&config).unwrap();
    store.save(&[factory::mock_goal(1, 2)]).unwrap();

    assert!(config.data_file.exists());
}
