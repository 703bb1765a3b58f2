//! Tests for MemoryStore.

use goal_tracker::storage::{GoalStore, MemoryStore};
use goal_tracker_test_utils::prelude::*;

/// Tests that clones share the stored blob.
#[test]
fn clones_share_blob() {
    let store = MemoryStore::new();
    let handle = store.clone();

    store.save(&[factory::mock_goal(1, 3)]).unwrap();

    assert_eq!(handle.load().unwrap(), vec![factory::mock_goal(1, 3)]);
}

/// Tests that saving overwrites the previous collection wholesale.
#[test]
fn save_replaces_previous_collection() {
    let store = MemoryStore::new();

    store
        .save(&[factory::mock_goal(1, 3), factory::mock_goal(2, 3)])
        .unwrap();
    store.save(&[factory::mock_goal(3, 3)]).unwrap();

    let ids: Vec<i64> = store.load().unwrap().iter().map(|goal| goal.id).collect();
    assert_eq!(ids, vec![3]);
}

/// Tests that a boxed store behaves like the store it wraps.
#[test]
fn boxed_store_delegates() {
    let inner = MemoryStore::new();
    let boxed: Box<dyn GoalStore> = Box::new(inner.clone());

    boxed.save(&[factory::mock_goal(1, 3)]).unwrap();

    assert!(inner.blob().is_some());
    assert_eq!(boxed.load().unwrap().len(), 1);
}
