//! Tests for GoalService::submit.

use goal_tracker::{
    error::InputError,
    model::{Level, Reward},
    tracker::SubmitOutcome,
};
use goal_tracker_test_utils::prelude::*;

/// Tests that adding a goal saves the whole collection.
///
/// Expected: store holds the new goal with zero progress
#[test]
fn saves_added_goal() {
    let mut test = TestBuilder::new().build();

    let outcome = test
        .service
        .submit(&factory::mock_draft("Drink water", "8", Level::Beginner, Reward::Immediate))
        .unwrap();

    let SubmitOutcome::Added(id) = outcome else {
        panic!("expected a new goal, got {outcome:?}");
    };
    let stored = test.stored_goals();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, id);
    assert_eq!(stored[0].text, "Drink water");
    assert_eq!(stored[0].target, 8);
    assert_eq!(stored[0].progress, 0);
}

/// Tests that new goals are appended to stored ones.
#[test]
fn appends_to_stored_goals() {
    let mut test = TestBuilder::new()
        .with_goal(factory::mock_goal(1, 5))
        .build();

    test.service
        .submit(&factory::mock_draft("Stretch", "3", Level::Expert, Reward::Delayed))
        .unwrap();

    let stored = test.stored_goals();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].id, 1);
    assert_eq!(stored[1].level, Level::Expert);
    assert_eq!(stored[1].reward, Reward::Delayed);
}

/// Tests that invalid input is skipped without touching storage.
///
/// Expected: Err, store still empty
#[test]
fn skips_invalid_input_without_saving() {
    let mut test = TestBuilder::new().build();

    let empty = test
        .service
        .submit(&factory::mock_draft("  ", "3", Level::Beginner, Reward::Immediate));
    let zero = test
        .service
        .submit(&factory::mock_draft("Run", "0", Level::Beginner, Reward::Immediate));

    assert_eq!(empty, Err(InputError::EmptyText));
    assert_eq!(zero, Err(InputError::NonPositiveTarget(0)));
    assert!(test.service.goals().is_empty());
    assert!(test.store.blob().is_none());
}
