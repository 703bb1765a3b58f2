//! Tests for editing goals through GoalService.

use goal_tracker::{
    model::{Direction, Level, Reward},
    tracker::SubmitOutcome,
};
use goal_tracker_test_utils::prelude::*;

/// Tests that an edited goal keeps its id and progress and restarts its click counter.
#[test]
fn edit_retains_id_and_resets_click_count() {
    let mut test = TestBuilder::new()
        .with_goal(factory::mock_goal(7, 30))
        .build();
    test.service.update_progress(7, Direction::Increase);
    test.service.update_progress(7, Direction::Increase);

    let mut draft = test.service.start_editing(7).unwrap();
    assert_eq!(test.stored_goals()[0].click_count, 0);

    draft.text = "Renamed".to_string();
    draft.level = Level::Expert;
    let outcome = test.service.submit(&draft).unwrap();

    assert_eq!(outcome, SubmitOutcome::Updated(7));
    let stored = test.stored_goals();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, 7);
    assert_eq!(stored[0].text, "Renamed");
    assert_eq!(stored[0].progress, 4);
    assert_eq!(stored[0].click_count, 0);
    assert_eq!(test.service.editing(), None);
}

/// Tests that the first click after an edit uses the smallest step.
///
/// Expected: delta 2 for an expert goal
#[test]
fn first_click_after_edit_starts_small() {
    let mut test = TestBuilder::new()
        .with_goal(factory::mock_goal(7, 100))
        .build();
    for _ in 0..3 {
        test.service.update_progress(7, Direction::Increase);
    }

    let mut draft = test.service.start_editing(7).unwrap();
    draft.level = Level::Expert;
    test.service.submit(&draft).unwrap();

    let outcome = test.service.update_progress(7, Direction::Increase).unwrap();
    assert_eq!(outcome.delta, 2);
}

/// Tests that cancelling an edit makes the next submission add a goal.
#[test]
fn cancel_editing_adds_next_submission() {
    let mut test = TestBuilder::new()
        .with_goal(factory::mock_goal(7, 10))
        .build();

    test.service.start_editing(7).unwrap();
    test.service.cancel_editing();

    let outcome = test
        .service
        .submit(&factory::mock_draft("Other", "2", Level::Beginner, Reward::Immediate))
        .unwrap();

    assert!(matches!(outcome, SubmitOutcome::Added(id) if id != 7));
    assert_eq!(test.stored_goals().len(), 2);
}
