//! Tests for GoalService::update_progress.

use goal_tracker::model::Direction;
use goal_tracker_test_utils::prelude::*;

/// Tests the escalating step for a beginner goal.
///
/// Expected: progress 1, 4, 9 after three clicks
#[test]
fn escalates_beginner_steps() {
    let mut test = TestBuilder::new()
        .with_goal(factory::mock_goal(1, 100))
        .build();

    let progress: Vec<u32> = (0..3)
        .map(|_| {
            test.service
                .update_progress(1, Direction::Increase)
                .unwrap()
                .progress
        })
        .collect();

    assert_eq!(progress, vec![1, 4, 9]);
}

/// Tests that expert goals take double steps.
///
/// Expected: deltas 2, 6, 10
#[test]
fn expert_steps_are_doubled() {
    let mut test = TestBuilder::new()
        .with_goal(factory::mock_expert_goal(1, 100))
        .build();

    let deltas: Vec<i64> = (0..3)
        .map(|_| {
            test.service
                .update_progress(1, Direction::Increase)
                .unwrap()
                .delta
        })
        .collect();

    assert_eq!(deltas, vec![2, 6, 10]);
}

/// Tests that progress stays within bounds across many clicks in both directions.
#[test]
fn progress_stays_within_bounds() {
    let mut test = TestBuilder::new()
        .with_goal(factory::mock_expert_goal(1, 25))
        .build();

    for click in 0..40 {
        let direction = if click % 3 == 0 {
            Direction::Decrease
        } else {
            Direction::Increase
        };
        let outcome = test.service.update_progress(1, direction).unwrap();
        assert!(outcome.progress <= 25);
    }

    let stored = test.stored_goals();
    assert!(stored[0].progress <= stored[0].target);
    assert_eq!(stored[0].click_count, 40);
}

/// Tests that completing an immediate reward goal asks for a celebration exactly once.
#[test]
fn immediate_reward_celebrates_on_crossing() {
    let mut test = TestBuilder::new()
        .with_goal(factory::mock_goal(1, 4))
        .build();

    let first = test.service.update_progress(1, Direction::Increase).unwrap();
    let second = test.service.update_progress(1, Direction::Increase).unwrap();
    let third = test.service.update_progress(1, Direction::Increase).unwrap();

    assert!(!first.completed);
    assert!(second.completed && second.celebrate);
    assert!(!third.completed && !third.celebrate);
}

/// Tests that dropping below the target and crossing again completes again.
#[test]
fn completes_again_after_falling_back() {
    let mut test = TestBuilder::new()
        .with_goal(factory::mock_goal(1, 1))
        .build();

    assert!(test.service.update_progress(1, Direction::Increase).unwrap().completed);
    let fallen = test.service.update_progress(1, Direction::Decrease).unwrap();
    assert_eq!(fallen.progress, 0);
    assert!(test.service.update_progress(1, Direction::Increase).unwrap().completed);
}

/// Tests that delayed reward goals complete silently and show up in the chart.
#[test]
fn delayed_reward_completes_without_celebration() {
    let mut test = TestBuilder::new()
        .with_goal(factory::mock_delayed_goal(1, 0, 1))
        .build();

    let outcome = test.service.update_progress(1, Direction::Increase).unwrap();

    assert!(outcome.completed);
    assert!(!outcome.celebrate);
    let points = test.service.chart_points();
    assert_eq!((points[0].progress, points[0].target), (1, 1));
}

/// Tests that each click is persisted.
#[test]
fn saves_after_every_click() {
    let mut test = TestBuilder::new()
        .with_goal(factory::mock_goal(1, 50))
        .build();

    test.service.update_progress(1, Direction::Increase);
    assert_eq!(test.stored_goals()[0].progress, 1);

    test.service.update_progress(1, Direction::Increase);
    let reloaded = test.reload();
    assert_eq!(reloaded.goals()[0].progress, 4);
    assert_eq!(reloaded.goals()[0].click_count, 2);
}

/// Tests clicking on an unknown goal.
#[test]
fn unknown_goal_is_ignored() {
    let mut test = TestBuilder::new().build();

    assert!(test.service.update_progress(99, Direction::Increase).is_none());
    assert!(test.store.blob().is_none());
}
