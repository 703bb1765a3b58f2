//! Tests for GoalService::load.

use goal_tracker::{model::Filter, storage::MemoryStore, GoalService};
use goal_tracker_test_utils::prelude::*;

/// Tests that stored goals are rehydrated in order.
#[test]
fn rehydrates_stored_goals() {
    let test = TestBuilder::new()
        .with_goals([
            factory::mock_goal(1, 5),
            factory::mock_delayed_goal(2, 3, 3),
        ])
        .build();

    let ids: Vec<i64> = test.service.goals().iter().map(|goal| goal.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(test.service.summary(), (1, 2));
    assert_eq!(test.service.filtered(Filter::Completed).len(), 1);
}

/// Tests that an empty store loads as an empty list.
#[test]
fn empty_store_loads_empty() {
    let service = GoalService::load(MemoryStore::new());
    assert!(service.goals().is_empty());
}

/// Tests that a corrupt blob is ignored and overwritten by the next save.
#[test]
fn corrupt_blob_starts_empty() {
    let mut test = TestBuilder::new().with_blob("not json at all").build();

    assert!(test.service.goals().is_empty());

    test.service
        .submit(&factory::mock_draft(
            "Fresh start",
            "1",
            Default::default(),
            Default::default(),
        ))
        .unwrap();
    assert_eq!(test.stored_goals().len(), 1);
}

/// Tests loading a blob written by an earlier version without click counts.
#[test]
fn accepts_blob_without_click_count() {
    let test = TestBuilder::new()
        .with_blob(
            r#"[{"id":1700000000000,"text":"Legacy","progress":2,"target":4,"level":"expert","reward":"delayed","increment":2}]"#,
        )
        .build();

    let goal = &test.service.goals()[0];
    assert_eq!(goal.text, "Legacy");
    assert_eq!(goal.click_count, 0);
    assert_eq!(test.service.delayed().len(), 1);
}

/// Tests that a record with a null target is dropped without losing its neighbours.
#[test]
fn null_target_drops_only_that_record() {
    let mut test = TestBuilder::new()
        .with_blob(
            r#"[{"id":1,"text":"Keep","progress":1,"target":3,"level":"beginner","reward":"immediate","increment":1,"clickCount":null},{"id":2,"text":"Broken","progress":null,"target":null,"level":"beginner","reward":"immediate","increment":1,"clickCount":0}]"#,
        )
        .build();

    let ids: Vec<i64> = test.service.goals().iter().map(|goal| goal.id).collect();
    assert_eq!(ids, vec![1]);
    assert_eq!(test.service.goals()[0].click_count, 0);

    test.service
        .submit(&factory::mock_draft(
            "Another",
            "2",
            Default::default(),
            Default::default(),
        ))
        .unwrap();
    let stored: Vec<String> = test.stored_goals().into_iter().map(|goal| goal.text).collect();
    assert_eq!(stored, vec!["Keep".to_string(), "Another".to_string()]);
}
