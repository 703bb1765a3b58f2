//! Tests for GoalService::delete.

use goal_tracker::model::Filter;
use goal_tracker_test_utils::prelude::*;

/// Tests that a deleted goal is gone from storage, every view and the chart.
#[test]
fn removes_goal_everywhere() {
    let mut test = TestBuilder::new()
        .with_goals([
            factory::mock_goal(1, 5),
            factory::mock_delayed_goal(2, 3, 3),
            factory::mock_delayed_goal(3, 1, 4),
        ])
        .build();

    assert!(test.service.delete(2));

    for filter in Filter::ALL {
        assert!(test.service.filtered(filter).iter().all(|goal| goal.id != 2));
    }
    assert_eq!(test.service.chart_points().len(), 1);
    assert_eq!(test.service.summary(), (0, 2));

    let stored: Vec<i64> = test.stored_goals().iter().map(|goal| goal.id).collect();
    assert_eq!(stored, vec![1, 3]);
}

/// Tests deleting an unknown goal.
///
/// Expected: false, nothing saved
#[test]
fn unknown_goal_is_not_saved() {
    let mut test = TestBuilder::new().build();

    assert!(!test.service.delete(42));
    assert!(test.store.blob().is_none());
}

/// Tests deleting the goal that is loaded into the form.
#[test]
fn ends_editing_of_deleted_goal() {
    let mut test = TestBuilder::new()
        .with_goal(factory::mock_goal(1, 5))
        .build();

    test.service.start_editing(1);
    test.service.delete(1);

    assert_eq!(test.service.editing(), None);
    assert!(test.stored_goals().is_empty());
}
